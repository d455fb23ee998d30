use log::{debug, error, info};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use super::assemble::{Assembler, Assembly};
use super::error::ConvertError;
use super::image::{Image, PixelFormat};
use super::provider::{Encoder, Resampler};

/// Loads an image in any format supported by the `image` crate, converting
/// it to RGBA regardless of how many channels the file stores.
pub fn load_rgba<P: AsRef<Path>>(path: P) -> Result<Image, ConvertError> {
    let path = path.as_ref();
    let decode_error = |source| {
        ConvertError::Decode {
            path: path.to_path_buf(),
            source: source,
        }
    };
    let rgba = ::image::open(path).map_err(decode_error)?.to_rgba8();
    let (width, height) = rgba.dimensions();
    debug!("loaded {} ({}x{})", path.display(), width, height);
    Image::from_data(PixelFormat::RGBA, width, height, rgba.into_raw())
        .map_err(|err| decode_error(::image::ImageError::IoError(err)))
}

/// Converts the image at `input` into an ICNS file at `output` containing
/// every icon type in the standard catalog.
///
/// Icon types that fail to resize or encode are left out of the file; the
/// returned `Assembly` lists them.  Errors are returned only when the source
/// cannot be loaded or the output cannot be written, and in either case no
/// output file is left behind.
pub fn convert<P, Q>(input: P, output: Q) -> Result<Assembly, ConvertError>
    where P: AsRef<Path>,
          Q: AsRef<Path>
{
    convert_with(&Assembler::new(), input, output)
}

/// Like [`convert`](fn.convert.html), but generates icons with the given
/// assembler.
pub fn convert_with<R, E, P, Q>(assembler: &Assembler<R, E>,
                                input: P,
                                output: Q)
                                -> Result<Assembly, ConvertError>
    where R: Resampler,
          E: Encoder,
          P: AsRef<Path>,
          Q: AsRef<Path>
{
    let (input, output) = (input.as_ref(), output.as_ref());
    if input.as_os_str().is_empty() {
        return Err(ConvertError::InvalidArgument("input path is empty"));
    }
    if output.as_os_str().is_empty() {
        return Err(ConvertError::InvalidArgument("output path is empty"));
    }

    let source = load_rgba(input)?;
    let file = File::create(output).map_err(|err| {
        ConvertError::CreateOutput {
            path: output.to_path_buf(),
            source: err,
        }
    })?;

    let result = assembler.assemble(&source, BufWriter::new(file));
    drop(source);
    match result {
        Ok(assembly) => {
            info!("wrote {} ({} bytes, {} of {} icons)",
                  output.display(),
                  assembly.total_length(),
                  assembly.written().len(),
                  assembler.catalog().len());
            Ok(assembly)
        }
        Err(err) => {
            if let Err(remove_err) = fs::remove_file(output) {
                debug!("could not remove partial output {}: {}",
                       output.display(),
                       remove_err);
            }
            Err(ConvertError::Write {
                path: output.to_path_buf(),
                source: err,
            })
        }
    }
}

/// Converts the image at `input` into an ICNS file at `output`, returning 0
/// on success or a negative status if the conversion failed.  Failures are
/// reported through the `log` crate.
pub fn convert_status(input: &str, output: &str) -> i32 {
    match convert(input, output) {
        Ok(_) => 0,
        Err(err) => {
            error!("{}", err);
            err.status()
        }
    }
}
