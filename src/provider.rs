//! Pluggable resizing and encoding steps used when assembling an icon family.

use ::image::imageops::{self, FilterType};
use ::image::RgbaImage;
use std::io::{self, Error, ErrorKind};

use crate::image::{Image, PixelFormat};

/// Produces a resized copy of an image.
pub trait Resampler {
    /// Returns a new image of exactly `width` by `height` pixels.
    fn resize(&self, image: &Image, width: u32, height: u32)
              -> io::Result<Image>;
}

/// Turns an image into the data payload of an icon element.
pub trait Encoder {
    /// Returns the encoded bytes for the image.
    fn encode(&self, image: &Image) -> io::Result<Vec<u8>>;
}

impl<'a, R: Resampler + ?Sized> Resampler for &'a R {
    fn resize(&self, image: &Image, width: u32, height: u32)
              -> io::Result<Image> {
        (**self).resize(image, width, height)
    }
}

impl<'a, E: Encoder + ?Sized> Encoder for &'a E {
    fn encode(&self, image: &Image) -> io::Result<Vec<u8>> {
        (**self).encode(image)
    }
}

/// Resizes RGBA images with one of the `image` crate's sampling filters.
#[derive(Clone, Copy, Debug)]
pub struct FilterResampler {
    filter: FilterType,
}

impl FilterResampler {
    /// Creates a resampler that uses the given filter.
    pub fn new(filter: FilterType) -> FilterResampler {
        FilterResampler { filter: filter }
    }

    /// Returns the filter used by this resampler.
    pub fn filter(&self) -> FilterType {
        self.filter
    }
}

impl Default for FilterResampler {
    fn default() -> FilterResampler {
        FilterResampler::new(FilterType::Lanczos3)
    }
}

impl Resampler for FilterResampler {
    fn resize(&self, image: &Image, width: u32, height: u32)
              -> io::Result<Image> {
        if width == 0 || height == 0 {
            let msg = format!("cannot resize to {}x{}", width, height);
            return Err(Error::new(ErrorKind::InvalidInput, msg));
        }
        if image.pixel_format() != PixelFormat::RGBA {
            let msg = format!("cannot resize {:?} image (expected RGBA)",
                              image.pixel_format());
            return Err(Error::new(ErrorKind::InvalidInput, msg));
        }
        let source = RgbaImage::from_raw(image.width(),
                                         image.height(),
                                         image.data().to_vec())
            .ok_or_else(|| {
                Error::new(ErrorKind::InvalidData,
                           "pixel data does not match image dimensions")
            })?;
        let resized = imageops::resize(&source, width, height, self.filter);
        Image::from_data(PixelFormat::RGBA, width, height, resized.into_raw())
    }
}

/// Encodes images as PNG files.
#[derive(Clone, Copy, Debug, Default)]
pub struct PngEncoder;

impl Encoder for PngEncoder {
    fn encode(&self, image: &Image) -> io::Result<Vec<u8>> {
        image.encode_png()
    }
}
