use icnsgen::IconFamily;
use std::env;
use std::fs::File;
use std::io::BufReader;
use std::process;

fn main() {
    env_logger::init();
    if env::args().count() != 2 {
        println!("Usage: readicns <path>");
        return;
    }
    let path = env::args().nth(1).unwrap_or_default();
    let family = match File::open(&path)
        .and_then(|file| IconFamily::read(BufReader::new(file))) {
        Ok(family) => family,
        Err(err) => {
            log::error!("failed to read ICNS file {}: {}", path, err);
            process::exit(1);
        }
    };
    println!("ICNS file contains {} element(s), {} bytes.",
             family.elements.len(),
             family.total_length());
    for (index, element) in family.elements.iter().enumerate() {
        match element.icon_type() {
            Some(icon_type) => {
                println!("Element {}: {} ({}x{}, {} byte payload)",
                         index,
                         element.ostype,
                         icon_type.pixel_width(),
                         icon_type.pixel_height(),
                         element.data.len())
            }
            None => {
                println!("Element {}: {} ({} byte payload)",
                         index,
                         element.ostype,
                         element.data.len())
            }
        }
    }
}
