use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use std::io::{self, Cursor, Error, ErrorKind, Read, Write};

use super::icontype::{IconType, OSType};
use super::image::Image;

/// The length of an icon element header, in bytes:
pub(crate) const ICON_ELEMENT_HEADER_LENGTH: u32 = 8;

/// One entry in an ICNS file: a four-byte OSType followed by the element's
/// data payload (for the icon types generated by this crate, a PNG file).
pub struct IconElement {
    /// The OSType for this element (e.g. `ic10` or `ic04`).
    pub ostype: OSType,
    /// The raw data payload for this element.
    pub data: Vec<u8>,
}

impl IconElement {
    /// Creates an icon element with the given OSType and data payload.
    pub fn new(ostype: OSType, data: Vec<u8>) -> IconElement {
        IconElement {
            ostype: ostype,
            data: data,
        }
    }

    /// Decodes the icon element into an image.  Returns an error if this
    /// element does not represent an icon type supported by this library, or
    /// if the PNG payload is malformed or has the wrong dimensions.
    pub fn decode_image(&self) -> io::Result<Image> {
        let icon_type = self.icon_type().ok_or_else(|| {
            Error::new(ErrorKind::InvalidInput,
                       format!("unsupported OSType: {}", self.ostype))
        })?;
        let width = icon_type.pixel_width();
        let height = icon_type.pixel_height();
        let image = Image::read_png(Cursor::new(&self.data))?;
        if image.width() != width || image.height() != height {
            let msg = format!("decoded PNG has wrong dimensions \
                               ({}x{} instead of {}x{})",
                              image.width(),
                              image.height(),
                              width,
                              height);
            return Err(Error::new(ErrorKind::InvalidData, msg));
        }
        Ok(image)
    }

    /// Returns the type of icon encoded by this element, or `None` if this
    /// element does not encode a supported icon type.
    pub fn icon_type(&self) -> Option<IconType> {
        IconType::from_ostype(self.ostype)
    }

    /// Returns the encoded length of the element, in bytes, including the
    /// length of the header.  Saturates at `u32::MAX` for a payload too large
    /// for the length field; `write` refuses such an element.
    pub fn total_length(&self) -> u32 {
        element_length(self.data.len()).unwrap_or(u32::MAX)
    }

    /// Reads an icon element from within an ICNS file.
    pub fn read<R: Read>(mut reader: R) -> io::Result<IconElement> {
        let mut raw_ostype = [0u8; 4];
        reader.read_exact(&mut raw_ostype)?;
        let element_length = reader.read_u32::<BigEndian>()?;
        if element_length < ICON_ELEMENT_HEADER_LENGTH {
            return Err(Error::new(ErrorKind::InvalidData,
                                  "invalid element length"));
        }
        let data_length = element_length - ICON_ELEMENT_HEADER_LENGTH;
        let mut data = vec![0u8; data_length as usize];
        reader.read_exact(&mut data)?;
        Ok(IconElement::new(OSType(raw_ostype), data))
    }

    /// Writes the icon element to within an ICNS file.
    pub fn write<W: Write>(&self, writer: W) -> io::Result<()> {
        write_element(writer, self.ostype, &self.data)?;
        Ok(())
    }
}

/// Writes one element record (OSType, big-endian length, payload).  Returns
/// the number of bytes written, which is also the stored length.
pub(crate) fn write_element<W: Write>(mut writer: W,
                                      ostype: OSType,
                                      data: &[u8])
                                      -> io::Result<u32> {
    let length = element_length(data.len()).ok_or_else(|| {
        Error::new(ErrorKind::InvalidInput,
                   format!("'{}' payload is too large ({} bytes)",
                           ostype,
                           data.len()))
    })?;
    let OSType(ref raw_ostype) = ostype;
    writer.write_all(raw_ostype)?;
    writer.write_u32::<BigEndian>(length)?;
    writer.write_all(data)?;
    Ok(length)
}

/// Returns the stored length of an element with a payload of the given size,
/// or `None` if it does not fit in the 32-bit length field.
pub(crate) fn element_length(data_length: usize) -> Option<u32> {
    if data_length > u32::MAX as usize {
        return None;
    }
    ICON_ELEMENT_HEADER_LENGTH.checked_add(data_length as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::icontype::{IconType, OSType};
    use super::super::image::{Image, PixelFormat};
    use std::io::Cursor;

    #[test]
    fn write_element_header() {
        let element = IconElement::new(OSType(*b"ic03"), b"abc".to_vec());
        assert_eq!(element.total_length(), 11);
        let mut output: Vec<u8> = vec![];
        element.write(&mut output).expect("write failed");
        assert_eq!(b"ic03\0\0\0\x0babc", &output as &[u8]);
    }

    #[test]
    fn read_rejects_short_length() {
        let input: &[u8] = b"ic03\0\0\0\x04";
        assert!(IconElement::read(Cursor::new(input)).is_err());
    }

    #[test]
    fn element_length_limits() {
        assert_eq!(element_length(0), Some(8));
        assert_eq!(element_length(100), Some(108));
        assert_eq!(element_length(u32::MAX as usize - 8), Some(u32::MAX));
        assert_eq!(element_length(u32::MAX as usize - 7), None);
    }

    #[test]
    fn decode_png_element() {
        let image = Image::new(PixelFormat::RGBA, 16, 16);
        let element = IconElement::new(IconType::RGBA32_16x16.ostype(),
                                       image.encode_png().unwrap());
        let decoded = element.decode_image().expect("failed to decode image");
        assert_eq!(decoded.width(), 16);
        assert_eq!(decoded.height(), 16);
    }

    #[test]
    fn decode_rejects_wrong_dimensions() {
        let image = Image::new(PixelFormat::RGBA, 16, 16);
        let element = IconElement::new(IconType::RGBA32_32x32_2x.ostype(),
                                       image.encode_png().unwrap());
        let error = element.decode_image().err().expect("decode succeeded");
        assert_eq!(error.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn decode_rejects_unknown_ostype() {
        let element = IconElement::new(OSType(*b"is32"), vec![0; 4]);
        let error = element.decode_image().err().expect("decode succeeded");
        assert_eq!(error.kind(), ErrorKind::InvalidInput);
    }
}
