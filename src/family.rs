use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use std::io::{self, Error, ErrorKind, Read, Write};

use super::element::{element_length, IconElement};
use super::icontype::IconType;
use super::image::Image;

/// The first four bytes of an ICNS file:
pub(crate) const ICNS_MAGIC_LITERAL: &'static [u8; 4] = b"icns";

/// The length of an icon family header, in bytes:
pub(crate) const ICON_FAMILY_HEADER_LENGTH: u32 = 8;

/// A set of icons stored in a single ICNS file.
pub struct IconFamily {
    /// The icon elements stored in the ICNS file.
    pub elements: Vec<IconElement>,
}

impl IconFamily {
    /// Creates a new, empty icon family.
    pub fn new() -> IconFamily {
        IconFamily { elements: Vec::new() }
    }

    /// Returns true if the icon family contains no icons nor any other
    /// elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Encodes the image into the family, automatically choosing an
    /// appropriate icon type based on the dimensions of the image.  Returns
    /// an error if there is no supported icon type matching the image
    /// dimensions.
    pub fn add_icon(&mut self, image: &Image) -> io::Result<()> {
        if let Some(icon_type) = IconType::from_pixel_size(image.width(),
                                                           image.height()) {
            self.add_icon_with_type(image, icon_type)
        } else {
            let msg = format!("no supported icon type has dimensions {}x{}",
                              image.width(),
                              image.height());
            Err(Error::new(ErrorKind::InvalidInput, msg))
        }
    }

    /// Encodes the image into the family as a PNG element of the given icon
    /// type.  Returns an error if the image has the wrong dimensions for the
    /// selected type.
    pub fn add_icon_with_type(&mut self,
                              image: &Image,
                              icon_type: IconType)
                              -> io::Result<()> {
        let width = icon_type.pixel_width();
        let height = icon_type.pixel_height();
        if image.width() != width || image.height() != height {
            let msg = format!("image has wrong dimensions for {} ({}x{} \
                               instead of {}x{})",
                              icon_type.ostype(),
                              image.width(),
                              image.height(),
                              width,
                              height);
            return Err(Error::new(ErrorKind::InvalidInput, msg));
        }
        let data = image.to_rgba().encode_png()?;
        self.elements.push(IconElement::new(icon_type.ostype(), data));
        Ok(())
    }

    /// Returns a list of all icon types for which the icon family contains
    /// an element, in file order.
    pub fn available_icons(&self) -> Vec<IconType> {
        self.elements.iter().filter_map(IconElement::icon_type).collect()
    }

    /// Determines whether the icon family contains an element with the given
    /// icon type.
    pub fn has_icon_with_type(&self, icon_type: IconType) -> bool {
        self.find_element(icon_type).is_ok()
    }

    /// Decodes an image from the family with the given icon type.  Returns an
    /// error if the element for the selected type is not present in the icon
    /// family, or if the encoded data is malformed.
    pub fn get_icon_with_type(&self,
                              icon_type: IconType)
                              -> io::Result<Image> {
        self.find_element(icon_type)?.decode_image()
    }

    /// Private helper method.
    fn find_element(&self, icon_type: IconType) -> io::Result<&IconElement> {
        let ostype = icon_type.ostype();
        self.elements.iter().find(|el| el.ostype == ostype).ok_or_else(|| {
            let msg = format!("the icon family does not contain a '{}' \
                               element",
                              ostype);
            Error::new(ErrorKind::NotFound, msg)
        })
    }

    /// Reads an icon family from an ICNS file.
    pub fn read<R: Read>(mut reader: R) -> io::Result<IconFamily> {
        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic)?;
        if magic != *ICNS_MAGIC_LITERAL {
            let msg = "not an icns file (wrong magic literal)";
            return Err(Error::new(ErrorKind::InvalidData, msg));
        }
        let file_length = reader.read_u32::<BigEndian>()?;
        let mut file_position: u32 = ICON_FAMILY_HEADER_LENGTH;
        let mut family = IconFamily::new();
        while file_position < file_length {
            let element = IconElement::read(reader.by_ref())?;
            file_position = file_position
                .checked_add(element.total_length())
                .ok_or_else(|| {
                    Error::new(ErrorKind::InvalidData,
                               "element lengths overflow the file length")
                })?;
            family.elements.push(element);
        }
        if file_position != file_length {
            let msg = format!("element lengths add up to {} bytes, but the \
                               header says {}",
                              file_position,
                              file_length);
            return Err(Error::new(ErrorKind::InvalidData, msg));
        }
        Ok(family)
    }

    /// Writes the icon family to an ICNS file in a single pass, computing the
    /// header length up front from the in-memory elements.
    ///
    /// Returns an error without writing anything if the elements do not fit
    /// in a 32-bit file length.
    pub fn write<W: Write>(&self, mut writer: W) -> io::Result<()> {
        let length = self.checked_length().ok_or_else(|| {
            Error::new(ErrorKind::InvalidInput,
                       "icon family is too large for an icns file")
        })?;
        writer.write_all(ICNS_MAGIC_LITERAL)?;
        writer.write_u32::<BigEndian>(length)?;
        for element in &self.elements {
            element.write(writer.by_ref())?;
        }
        Ok(())
    }

    /// Returns the encoded length of the file, in bytes, including the
    /// length of the header.  Saturates at `u32::MAX` if the elements are too
    /// large for an ICNS file.
    pub fn total_length(&self) -> u32 {
        self.checked_length().unwrap_or(u32::MAX)
    }

    /// Private helper method.
    fn checked_length(&self) -> Option<u32> {
        family_length(self.elements.iter().map(|element| element.data.len()))
    }
}

/// Returns the length of a file holding elements with the given payload
/// sizes, or `None` if it does not fit in the 32-bit length field.
fn family_length<I>(payload_lengths: I) -> Option<u32>
    where I: IntoIterator<Item = usize>
{
    let mut length = ICON_FAMILY_HEADER_LENGTH;
    for payload_length in payload_lengths {
        length = length.checked_add(element_length(payload_length)?)?;
    }
    Some(length)
}

impl Default for IconFamily {
    fn default() -> IconFamily {
        IconFamily::new()
    }
}
