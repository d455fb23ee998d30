use std::fmt;
use std::str::FromStr;

/// Types of PNG-bearing icon elements that can be generated from a source
/// image.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum IconType {
    /// 16x16 32-bit icon.
    RGBA32_16x16,
    /// 32x32 32-bit icon.
    RGBA32_32x32,
    /// 32x32 32-bit icon at 2x "retina" density (so, 64 by 64 pixels).
    RGBA32_32x32_2x,
    /// 48x48 32-bit icon.
    RGBA32_48x48,
    /// 64x64 32-bit icon.
    RGBA32_64x64,
    /// 64x64 32-bit icon at 2x "retina" density (so, 128 by 128 pixels).
    RGBA32_64x64_2x,
    /// 128x128 32-bit icon.
    RGBA32_128x128,
    /// 256x256 32-bit icon.
    RGBA32_256x256,
    /// 256x256 32-bit icon at 2x "retina" density (so, 512 by 512 pixels).
    RGBA32_256x256_2x,
    /// 512x512 32-bit icon.
    RGBA32_512x512,
    /// 512x512 32-bit icon at 2x "retina" density (so, 1024 by 1024 pixels).
    RGBA32_512x512_2x,
    /// 1024x1024 32-bit icon.
    RGBA32_1024x1024,
}

impl IconType {
    /// Every icon type generated for a new ICNS file, in the order the
    /// elements are written.
    pub const CATALOG: [IconType; 12] = [
        IconType::RGBA32_1024x1024,
        IconType::RGBA32_512x512,
        IconType::RGBA32_512x512_2x,
        IconType::RGBA32_256x256,
        IconType::RGBA32_256x256_2x,
        IconType::RGBA32_128x128,
        IconType::RGBA32_64x64_2x,
        IconType::RGBA32_32x32_2x,
        IconType::RGBA32_64x64,
        IconType::RGBA32_32x32,
        IconType::RGBA32_48x48,
        IconType::RGBA32_16x16,
    ];

    /// Get the icon type associated with the given OSType, if any.
    pub fn from_ostype(ostype: OSType) -> Option<IconType> {
        let OSType(raw_ostype) = ostype;
        match &raw_ostype {
            b"ic03" => Some(IconType::RGBA32_16x16),
            b"ic04" => Some(IconType::RGBA32_32x32),
            b"ic11" => Some(IconType::RGBA32_32x32_2x),
            b"ic06" => Some(IconType::RGBA32_48x48),
            b"ic05" => Some(IconType::RGBA32_64x64),
            b"ic12" => Some(IconType::RGBA32_64x64_2x),
            b"ic07" => Some(IconType::RGBA32_128x128),
            b"ic08" => Some(IconType::RGBA32_256x256),
            b"ic13" => Some(IconType::RGBA32_256x256_2x),
            b"ic09" => Some(IconType::RGBA32_512x512),
            b"ic14" => Some(IconType::RGBA32_512x512_2x),
            b"ic10" => Some(IconType::RGBA32_1024x1024),
            _ => None,
        }
    }

    /// Get the icon type with the given pixel dimensions, if any.  When both
    /// a 1x and a 2x type share the same pixel size, the 1x type is chosen.
    ///
    /// # Examples
    /// ```
    /// use icnsgen::IconType;
    /// assert_eq!(IconType::from_pixel_size(48, 48),
    ///            Some(IconType::RGBA32_48x48));
    /// assert_eq!(IconType::from_pixel_size(128, 128),
    ///            Some(IconType::RGBA32_128x128));
    /// assert_eq!(IconType::from_pixel_size(64, 32), None);
    /// ```
    pub fn from_pixel_size(width: u32, height: u32) -> Option<IconType> {
        let candidates: Vec<IconType> = IconType::CATALOG
            .iter()
            .cloned()
            .filter(|icon_type| {
                icon_type.pixel_width() == width &&
                icon_type.pixel_height() == height
            })
            .collect();
        candidates.iter()
            .cloned()
            .find(|icon_type| !icon_type.is_retina())
            .or_else(|| candidates.first().cloned())
    }

    /// Get the OSType that represents this icon type.
    pub fn ostype(self) -> OSType {
        match self {
            IconType::RGBA32_16x16 => OSType(*b"ic03"),
            IconType::RGBA32_32x32 => OSType(*b"ic04"),
            IconType::RGBA32_32x32_2x => OSType(*b"ic11"),
            IconType::RGBA32_48x48 => OSType(*b"ic06"),
            IconType::RGBA32_64x64 => OSType(*b"ic05"),
            IconType::RGBA32_64x64_2x => OSType(*b"ic12"),
            IconType::RGBA32_128x128 => OSType(*b"ic07"),
            IconType::RGBA32_256x256 => OSType(*b"ic08"),
            IconType::RGBA32_256x256_2x => OSType(*b"ic13"),
            IconType::RGBA32_512x512 => OSType(*b"ic09"),
            IconType::RGBA32_512x512_2x => OSType(*b"ic14"),
            IconType::RGBA32_1024x1024 => OSType(*b"ic10"),
        }
    }

    /// Returns the pixel data width of this icon type.  Normally this is the
    /// same as the screen width, but for 2x "retina" density icons, this will
    /// be twice that value.
    ///
    /// # Examples
    /// ```
    /// use icnsgen::IconType;
    /// assert_eq!(IconType::RGBA32_48x48.pixel_width(), 48);
    /// assert_eq!(IconType::RGBA32_32x32_2x.pixel_width(), 64);
    /// assert_eq!(IconType::RGBA32_512x512_2x.pixel_width(), 1024);
    /// ```
    pub fn pixel_width(self) -> u32 {
        self.screen_width() * self.pixel_density()
    }

    /// Returns the pixel data height of this icon type.  Icons are always
    /// square, so this is the same as the pixel width.
    pub fn pixel_height(self) -> u32 {
        self.screen_height() * self.pixel_density()
    }

    /// Returns the pixel density for this icon type -- that is, 2 for 2x
    /// "retina" density icons, or 1 for other icon types.
    pub fn pixel_density(self) -> u32 {
        if self.is_retina() { 2 } else { 1 }
    }

    /// Returns true for 2x "retina" density icon types.
    pub fn is_retina(self) -> bool {
        match self {
            IconType::RGBA32_32x32_2x |
            IconType::RGBA32_64x64_2x |
            IconType::RGBA32_256x256_2x |
            IconType::RGBA32_512x512_2x => true,
            _ => false,
        }
    }

    /// Returns the screen width of this icon type.  Normally this is the same
    /// as the pixel width, but for 2x "retina" density icons, this will be
    /// half that value.
    ///
    /// # Examples
    /// ```
    /// use icnsgen::IconType;
    /// assert_eq!(IconType::RGBA32_256x256.screen_width(), 256);
    /// assert_eq!(IconType::RGBA32_256x256_2x.screen_width(), 256);
    /// ```
    pub fn screen_width(self) -> u32 {
        match self {
            IconType::RGBA32_16x16 => 16,
            IconType::RGBA32_32x32 => 32,
            IconType::RGBA32_32x32_2x => 32,
            IconType::RGBA32_48x48 => 48,
            IconType::RGBA32_64x64 => 64,
            IconType::RGBA32_64x64_2x => 64,
            IconType::RGBA32_128x128 => 128,
            IconType::RGBA32_256x256 => 256,
            IconType::RGBA32_256x256_2x => 256,
            IconType::RGBA32_512x512 => 512,
            IconType::RGBA32_512x512_2x => 512,
            IconType::RGBA32_1024x1024 => 1024,
        }
    }

    /// Returns the screen height of this icon type.
    pub fn screen_height(self) -> u32 {
        self.screen_width()
    }
}

/// A Macintosh OSType (also known as a ResType), used in ICNS files to
/// identify the type of each icon element.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct OSType(pub [u8; 4]);

impl fmt::Display for OSType {
    fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
        let &OSType(raw) = self;
        for &byte in &raw {
            write!(out, "{}", char::from(byte))?;
        }
        Ok(())
    }
}

impl FromStr for OSType {
    type Err = String;

    fn from_str(input: &str) -> Result<OSType, String> {
        let bytes = input.as_bytes();
        if bytes.len() != 4 {
            Err(format!("OSType string must be 4 bytes (was {})", bytes.len()))
        } else {
            let mut raw = [0u8; 4];
            raw.clone_from_slice(bytes);
            Ok(OSType(raw))
        }
    }
}
