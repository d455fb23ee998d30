//! Creates an ICNS file containing every standard icon size, generated from a
//! single source image.
//!
//! ```shell
//! cargo run --bin img2icns -- [--filter <name>] <path/to/image.png> <path/to/icon.icns>
//! ```
//!
//! The source may be any format the `image` crate can decode, and should be
//! square (ideally 1024x1024).  `--filter` selects the resampling filter.
//! Set `RUST_LOG=debug` to see each element as it is written.

use clap::Parser;
use icnsgen::{convert_with, Assembler, FilterResampler, FilterType};
use log::{debug, error};
use std::path::PathBuf;
use std::process;

#[derive(Debug, Parser)]
#[command(version, about = "Builds a multi-resolution .icns file from one image")]
struct Args {
    /// Source image (PNG, JPEG, BMP, ...)
    input: PathBuf,
    /// Destination .icns file
    output: PathBuf,
    /// Filter used to resample the source to each icon size
    #[arg(value_enum, short = 'f', long, default_value_t = Filter::Lanczos3)]
    filter: Filter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum Filter {
    /// Nearest neighbor.
    Nearest,
    /// Linear.
    Triangle,
    /// Cubic.
    #[value(name = "catmullrom")]
    CatmullRom,
    /// Gaussian.
    Gaussian,
    /// Lanczos with window 3.
    Lanczos3,
}

impl From<Filter> for FilterType {
    fn from(filter: Filter) -> FilterType {
        match filter {
            Filter::Nearest => FilterType::Nearest,
            Filter::Triangle => FilterType::Triangle,
            Filter::CatmullRom => FilterType::CatmullRom,
            Filter::Gaussian => FilterType::Gaussian,
            Filter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default()
            .default_filter_or("info"))
        .init();

    let resampler = FilterResampler::new(args.filter.into());
    debug!("resampling with {:?}", resampler.filter());
    let assembler = Assembler::new().with_resampler(resampler);
    if let Err(err) = convert_with(&assembler, &args.input, &args.output) {
        error!("{}", err);
        process::exit(1);
    }
}
