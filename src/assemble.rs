//! Builds an ICNS file from one source image by resizing and encoding it
//! once for every icon type in a catalog.
//!
//! The header is written first with a zero length.  Elements are appended as
//! they are produced, and once the last one is written the length field is
//! overwritten with the real file size.  An icon type that cannot be resized
//! or encoded is logged and left out of the file; it never aborts the rest.

use byteorder::{BigEndian, WriteBytesExt};
use log::{debug, warn};
use std::io::{self, Seek, SeekFrom, Write};

use super::element::{element_length, write_element};
use super::family::{ICNS_MAGIC_LITERAL, ICON_FAMILY_HEADER_LENGTH};
use super::icontype::IconType;
use super::image::{Image, PixelFormat};
use super::provider::{Encoder, FilterResampler, PngEncoder, Resampler};

/// Drives the resize/encode/write loop over a catalog of icon types.
pub struct Assembler<R = FilterResampler, E = PngEncoder> {
    catalog: Vec<IconType>,
    resampler: R,
    encoder: E,
}

impl Assembler {
    /// Creates an assembler for the full catalog, resizing with a Lanczos
    /// filter and encoding PNG elements.
    pub fn new() -> Assembler {
        Assembler {
            catalog: IconType::CATALOG.to_vec(),
            resampler: FilterResampler::default(),
            encoder: PngEncoder,
        }
    }
}

impl Default for Assembler {
    fn default() -> Assembler {
        Assembler::new()
    }
}

impl<R: Resampler, E: Encoder> Assembler<R, E> {
    /// Replaces the list of icon types to generate.  Elements are written in
    /// the order given.
    pub fn with_catalog(mut self, catalog: &[IconType]) -> Assembler<R, E> {
        self.catalog = catalog.to_vec();
        self
    }

    /// Replaces the resizing step.
    pub fn with_resampler<R2: Resampler>(self,
                                         resampler: R2)
                                         -> Assembler<R2, E> {
        Assembler {
            catalog: self.catalog,
            resampler: resampler,
            encoder: self.encoder,
        }
    }

    /// Replaces the encoding step.
    pub fn with_encoder<E2: Encoder>(self, encoder: E2) -> Assembler<R, E2> {
        Assembler {
            catalog: self.catalog,
            resampler: self.resampler,
            encoder: encoder,
        }
    }

    /// Returns the icon types this assembler generates, in file order.
    pub fn catalog(&self) -> &[IconType] {
        &self.catalog
    }

    /// Writes a complete ICNS file for `source` to `writer`.
    ///
    /// Only errors from the writer itself are returned; an icon type whose
    /// image cannot be produced is recorded in the returned `Assembly` as
    /// skipped.  The writer must support seeking so that the header length
    /// can be filled in after the last element.
    pub fn assemble<W: Write + Seek>(&self,
                                     source: &Image,
                                     mut writer: W)
                                     -> io::Result<Assembly> {
        let rgba;
        let source = if source.pixel_format() == PixelFormat::RGBA {
            source
        } else {
            rgba = source.to_rgba();
            &rgba
        };

        writer.write_all(ICNS_MAGIC_LITERAL)?;
        let length_position = writer.stream_position()?;
        writer.write_u32::<BigEndian>(0)?;

        let mut assembly = Assembly::new();
        for &icon_type in &self.catalog {
            let payload = match self.render(source, icon_type) {
                Ok(payload) => payload,
                Err(reason) => {
                    assembly.skip(icon_type, reason);
                    continue;
                }
            };
            let length = match element_length(payload.len()) {
                Some(length) if assembly.total_length
                    .checked_add(length)
                    .is_some() => length,
                _ => {
                    let reason = format!("{}-byte payload does not fit in \
                                          the file",
                                         payload.len());
                    assembly.skip(icon_type, reason);
                    continue;
                }
            };
            write_element(&mut writer, icon_type.ostype(), &payload)?;
            debug!("wrote '{}' element ({} bytes)", icon_type.ostype(), length);
            assembly.total_length += length;
            assembly.written.push(icon_type);
        }

        let end_position = writer.stream_position()?;
        writer.seek(SeekFrom::Start(length_position))?;
        writer.write_u32::<BigEndian>(assembly.total_length)?;
        writer.seek(SeekFrom::Start(end_position))?;
        writer.flush()?;

        if assembly.is_empty() {
            warn!("no icon elements could be generated; wrote an empty icns \
                   file");
        }
        Ok(assembly)
    }

    /// Produces the element payload for one icon type, or the reason it
    /// could not be produced.
    fn render(&self, source: &Image, icon_type: IconType)
              -> Result<Vec<u8>, String> {
        let width = icon_type.pixel_width();
        let height = icon_type.pixel_height();
        let resized = self.resampler
            .resize(source, width, height)
            .map_err(|err| {
                format!("resize to {}x{} failed: {}", width, height, err)
            })?;
        if resized.width() != width || resized.height() != height {
            return Err(format!("resize to {}x{} produced a {}x{} image",
                               width,
                               height,
                               resized.width(),
                               resized.height()));
        }
        let payload = self.encoder.encode(&resized).map_err(|err| {
            format!("encoding {}x{} image failed: {}", width, height, err)
        })?;
        if payload.is_empty() {
            return Err(format!("encoding {}x{} image produced no data",
                               width,
                               height));
        }
        Ok(payload)
    }
}

/// The outcome of writing one ICNS file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Assembly {
    total_length: u32,
    written: Vec<IconType>,
    skipped: Vec<SkippedIcon>,
}

/// An icon type that was left out of the file, and why.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SkippedIcon {
    /// The icon type that could not be generated.
    pub icon_type: IconType,
    /// A description of the resize or encode failure.
    pub reason: String,
}

impl Assembly {
    fn new() -> Assembly {
        Assembly {
            total_length: ICON_FAMILY_HEADER_LENGTH,
            written: Vec::new(),
            skipped: Vec::new(),
        }
    }

    fn skip(&mut self, icon_type: IconType, reason: String) {
        warn!("skipping '{}' ({}x{}): {}",
              icon_type.ostype(),
              icon_type.pixel_width(),
              icon_type.pixel_height(),
              reason);
        self.skipped.push(SkippedIcon {
            icon_type: icon_type,
            reason: reason,
        });
    }

    /// Returns the length stored in the file header, which is the size of the
    /// whole file in bytes.
    pub fn total_length(&self) -> u32 {
        self.total_length
    }

    /// Returns the icon types that were written, in file order.
    pub fn written(&self) -> &[IconType] {
        &self.written
    }

    /// Returns the icon types that were left out of the file.
    pub fn skipped(&self) -> &[SkippedIcon] {
        &self.skipped
    }

    /// Returns true if no elements were written (the file holds only its
    /// header).
    pub fn is_empty(&self) -> bool {
        self.written.is_empty()
    }
}
