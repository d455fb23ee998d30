//! Library for building Apple Icon Image (.icns) files from a single source
//! image.
//!
//! The source is decoded, normalized to RGBA, and then resized and encoded as
//! a PNG once for every icon type in [`IconType::CATALOG`], from 16x16 up to
//! 1024x1024 (including 2x "retina" variants).  The resulting elements are
//! written to the output in catalog order, and the file length in the header
//! is filled in once all of them have been written.
//!
//! ```no_run
//! let assembly = icnsgen::convert("icon.png", "icon.icns")?;
//! println!("wrote {} bytes", assembly.total_length());
//! # Ok::<(), icnsgen::ConvertError>(())
//! ```
//!
//! See https://en.wikipedia.org/wiki/Apple_Icon_Image_format for more
//! information about the file format.

#![warn(missing_docs)]

mod assemble;
mod convert;
mod element;
mod error;
mod family;
mod icontype;
mod image;
mod pngio;
mod provider;

pub use self::assemble::{Assembler, Assembly, SkippedIcon};
pub use self::convert::{convert, convert_status, convert_with, load_rgba};
pub use self::element::IconElement;
pub use self::error::ConvertError;
pub use self::family::IconFamily;
pub use self::icontype::{IconType, OSType};
pub use self::image::{Image, PixelFormat};
pub use self::provider::{Encoder, FilterResampler, PngEncoder, Resampler};

/// Resampling filters accepted by [`FilterResampler`].
pub use ::image::imageops::FilterType;
