use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A failure that stops an image-to-ICNS conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// An input or output path was empty.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// The source image could not be read or decoded.
    #[error("cannot load image {}: {source}", .path.display())]
    Decode {
        /// The source image path.
        path: PathBuf,
        /// The underlying decoder error.
        #[source]
        source: ::image::ImageError,
    },
    /// The output file could not be created.
    #[error("cannot create output file {}: {source}", .path.display())]
    CreateOutput {
        /// The output file path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// Writing the ICNS data to the output file failed partway through.
    #[error("cannot write output file {}: {source}", .path.display())]
    Write {
        /// The output file path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl ConvertError {
    /// Returns the negative status code reported for this error by
    /// [`convert_status`](crate::convert_status).
    pub fn status(&self) -> i32 {
        match *self {
            ConvertError::InvalidArgument(_) => -1,
            ConvertError::Decode { .. } => -2,
            ConvertError::CreateOutput { .. } => -3,
            ConvertError::Write { .. } => -4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn every_error_has_a_distinct_negative_status() {
        let path = PathBuf::from("out.icns");
        let errors = vec![
            ConvertError::InvalidArgument("input path is empty"),
            ConvertError::Decode {
                path: path.clone(),
                source: ::image::ImageError::IoError(
                    Error::new(ErrorKind::NotFound, "gone")),
            },
            ConvertError::CreateOutput {
                path: path.clone(),
                source: Error::new(ErrorKind::PermissionDenied, "denied"),
            },
            ConvertError::Write {
                path: path,
                source: Error::new(ErrorKind::Other, "disk full"),
            },
        ];
        let statuses: Vec<i32> = errors.iter().map(|e| e.status()).collect();
        assert_eq!(statuses, vec![-1, -2, -3, -4]);
    }

    #[test]
    fn write_error_names_the_output_file() {
        let error = ConvertError::Write {
            path: PathBuf::from("out.icns"),
            source: Error::new(ErrorKind::Other, "disk full"),
        };
        assert_eq!(error.status(), -4);
        assert_eq!(error.to_string(),
                   "cannot write output file out.icns: disk full");
    }
}
