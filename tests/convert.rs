extern crate icnsgen;
extern crate tempfile;

use icnsgen::{convert, convert_status, convert_with, Assembler,
              FilterResampler, FilterType, IconFamily, IconType, Image,
              PixelFormat, Resampler};
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Error, ErrorKind};
use std::path::{Path, PathBuf};
use tempfile::tempdir;

#[test]
fn convert_opaque_1024_source() {
    let dir = tempdir().unwrap();
    let input = write_source_png(dir.path(), "source.png", 1024,
                                 PixelFormat::RGBA);
    let output = dir.path().join("icon.icns");
    let assembly = convert(&input, &output).expect("conversion failed");
    assert!(assembly.skipped().is_empty());
    assert_eq!(assembly.written(), &IconType::CATALOG[..]);

    let bytes = fs::read(&output).unwrap();
    assert_eq!(&bytes[0..4], b"icns");
    assert_eq!(header_length(&bytes) as usize, bytes.len());
    assert_eq!(header_length(&bytes), assembly.total_length());

    let family = load_icns_file(&output).unwrap();
    assert_eq!(family.available_icons(), IconType::CATALOG.to_vec());
    let element_sum: u32 = family.elements
        .iter()
        .map(|element| element.total_length())
        .sum();
    assert_eq!(assembly.total_length(), 8 + element_sum);
    for element in &family.elements {
        assert_eq!(element.total_length() as usize, 8 + element.data.len());
        let icon_type = element.icon_type().unwrap();
        let image = element.decode_image().unwrap();
        assert_eq!(image.width(), icon_type.pixel_width());
        assert_eq!(image.height(), icon_type.pixel_height());
    }

    let ic10 = family.get_icon_with_type(IconType::RGBA32_1024x1024).unwrap();
    assert_eq!((ic10.width(), ic10.height()), (1024, 1024));
    let ic11 = family.get_icon_with_type(IconType::RGBA32_32x32_2x).unwrap();
    assert_eq!((ic11.width(), ic11.height()), (64, 64));
}

#[test]
fn conversion_is_repeatable() {
    let dir = tempdir().unwrap();
    let input = write_source_png(dir.path(), "source.png", 64,
                                 PixelFormat::RGBA);
    let first = dir.path().join("first.icns");
    let second = dir.path().join("second.icns");
    assert_eq!(convert_status(input.to_str().unwrap(),
                              first.to_str().unwrap()),
               0);
    assert_eq!(convert_status(input.to_str().unwrap(),
                              second.to_str().unwrap()),
               0);
    assert!(fs::read(&first).unwrap() == fs::read(&second).unwrap());
}

#[test]
fn rgb_source_is_normalized_to_rgba() {
    let dir = tempdir().unwrap();
    let input = write_source_png(dir.path(), "rgb.png", 40, PixelFormat::RGB);
    let output = dir.path().join("rgb.icns");
    let assembler = Assembler::new()
        .with_resampler(FilterResampler::new(FilterType::Nearest))
        .with_catalog(&[IconType::RGBA32_16x16, IconType::RGBA32_48x48]);
    convert_with(&assembler, &input, &output).unwrap();
    let family = load_icns_file(&output).unwrap();
    let icon = family.get_icon_with_type(IconType::RGBA32_48x48).unwrap();
    assert_eq!(icon.pixel_format(), PixelFormat::RGBA);
    assert!(icon.data().chunks(4).all(|pixel| pixel[3] == 255));
}

#[test]
fn failed_resize_omits_one_element() {
    let dir = tempdir().unwrap();
    let input = write_source_png(dir.path(), "source.png", 32,
                                 PixelFormat::RGBA);
    let full_path = dir.path().join("full.icns");
    let partial_path = dir.path().join("partial.icns");
    let full = convert(&input, &full_path).unwrap();
    let assembler = Assembler::new().with_resampler(RefuseSize(48));
    let partial = convert_with(&assembler, &input, &partial_path).unwrap();

    assert_eq!(partial.written().len(), IconType::CATALOG.len() - 1);
    let skipped: Vec<IconType> = partial.skipped()
        .iter()
        .map(|skip| skip.icon_type)
        .collect();
    assert_eq!(skipped, vec![IconType::RGBA32_48x48]);

    let full_family = load_icns_file(&full_path).unwrap();
    let partial_family = load_icns_file(&partial_path).unwrap();
    let dropped: u32 = full_family.elements
        .iter()
        .filter(|element| element.icon_type() == Some(IconType::RGBA32_48x48))
        .map(|element| element.total_length())
        .sum();
    assert_eq!(partial.total_length(), full.total_length() - dropped);
    assert_eq!(partial_family.total_length(), partial.total_length());
    assert!(!partial_family.has_icon_with_type(IconType::RGBA32_48x48));
    let mut expected = IconType::CATALOG.to_vec();
    expected.retain(|&icon_type| icon_type != IconType::RGBA32_48x48);
    assert_eq!(partial_family.available_icons(), expected);
}

#[test]
fn undecodable_source_creates_no_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("garbage.png");
    fs::write(&input, b"this is not an image").unwrap();
    let output = dir.path().join("garbage.icns");
    let status = convert_status(input.to_str().unwrap(),
                                output.to_str().unwrap());
    assert!(status < 0);
    assert!(!output.exists());
}

#[test]
fn missing_source_creates_no_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("missing.png");
    let output = dir.path().join("missing.icns");
    let error = convert(&input, &output).unwrap_err();
    assert_eq!(error.status(), -2);
    assert!(!output.exists());
}

#[test]
fn unwritable_destination_fails_after_decode() {
    let dir = tempdir().unwrap();
    let input = write_source_png(dir.path(), "source.png", 16,
                                 PixelFormat::RGBA);
    let output = dir.path().join("no-such-dir").join("icon.icns");
    let error = convert(&input, &output).unwrap_err();
    assert_eq!(error.status(), -3);
    assert!(error.to_string().contains("no-such-dir"));
    assert!(convert_status(input.to_str().unwrap(),
                           output.to_str().unwrap()) < 0);
}

/// Refuses one pixel size and otherwise resizes like the default resampler.
struct RefuseSize(u32);

impl Resampler for RefuseSize {
    fn resize(&self, image: &Image, width: u32, height: u32)
              -> io::Result<Image> {
        if width == self.0 {
            return Err(Error::new(ErrorKind::Other, "size refused"));
        }
        FilterResampler::default().resize(image, width, height)
    }
}

fn write_source_png(dir: &Path,
                    name: &str,
                    size: u32,
                    format: PixelFormat)
                    -> PathBuf {
    let mut image = Image::new(format, size, size);
    let channels = format.channels() as usize;
    for (index, pixel) in image.data_mut().chunks_mut(channels).enumerate() {
        let (x, y) = (index as u32 % size, index as u32 / size);
        pixel[0] = (x * 255 / size) as u8;
        if channels >= 3 {
            pixel[1] = (y * 255 / size) as u8;
            pixel[2] = 128;
        }
        if channels == 4 {
            pixel[3] = 255;
        }
    }
    let path = dir.join(name);
    let file = BufWriter::new(File::create(&path).unwrap());
    image.write_png(file).unwrap();
    path
}

fn load_icns_file(path: &Path) -> io::Result<IconFamily> {
    let file = BufReader::new(File::open(path)?);
    IconFamily::read(file)
}

fn header_length(bytes: &[u8]) -> u32 {
    u32::from_be_bytes([bytes[4], bytes[5], bytes[6], bytes[7]])
}
