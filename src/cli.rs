use crate::constants::{
    DEFAULT_ICON_PREFIX, DEFAULT_ICON_SIZES, DEFAULT_OUTPUT_DIR, DEFAULT_SOURCE_ICON,
    MAX_ICON_SIZE, MAX_OPTIMIZATION_LEVEL, MIN_OPTIMIZATION_LEVEL,
};
use clap::{Parser, ValueEnum};
use image::imageops::FilterType;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "icon-resizer",
    about = "Generate square PNG icons at fixed sizes from a single source image",
    long_about = "icon-resizer loads one source image, resamples it to each requested square size \
                  with an anti-aliased filter and writes the results as <prefix><size>.png. \
                  Without any arguments it reads src/icons/app_icon_v2.png and writes \
                  icon16.png, icon48.png and icon128.png into src/icons.",
    version = "0.1.0",
    after_help = "EXAMPLES:\n  \
    icon-resizer\n  \
    icon-resizer -s logo.png -o dist/icons --sizes 16,32,48,128\n  \
    icon-resizer --filter catmull-rom -O 4"
)]
pub struct Args {
    #[arg(
        short = 's',
        long,
        default_value = DEFAULT_SOURCE_ICON,
        help = "Source image path"
    )]
    pub source: PathBuf,

    #[arg(
        short = 'o',
        long,
        default_value = DEFAULT_OUTPUT_DIR,
        help = "Directory the icons are written to",
        long_help = "Directory the icons are written to. It must already exist; \
                     existing icons with the same names are overwritten."
    )]
    pub output_dir: PathBuf,

    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = DEFAULT_ICON_SIZES,
        value_parser = clap::value_parser!(u32).range(1..=MAX_ICON_SIZE as i64),
        help = "Comma-separated square sizes in pixels",
        long_help = "Comma-separated square sizes in pixels, processed in the given order. \
                     Every output is forced to exactly size x size regardless of the source aspect ratio."
    )]
    pub sizes: Vec<u32>,

    #[arg(long, default_value = DEFAULT_ICON_PREFIX, help = "File name prefix for generated icons")]
    pub prefix: String,

    #[arg(
        short = 'F',
        long,
        value_enum,
        default_value_t = ResampleFilter::Lanczos3,
        help = "Resampling filter"
    )]
    pub filter: ResampleFilter,

    #[arg(
        short = 'O',
        long,
        value_parser = clap::value_parser!(u8).range(MIN_OPTIMIZATION_LEVEL as i64..=MAX_OPTIMIZATION_LEVEL as i64),
        help = "Optimize each PNG with oxipng at the given level (0-6)",
        long_help = "Run oxipng on every generated icon using the given preset, \
                     from 0 (fast) to 6 (smallest output). Disabled by default."
    )]
    pub optimize: Option<u8>,

    #[arg(short = 'q', long, conflicts_with = "verbose", help = "Do not print generated paths")]
    pub quiet: bool,

    #[arg(short = 'v', long, help = "Print extra details about each step")]
    pub verbose: bool,
}

/// Anti-aliased filters offered for downscaling. Nearest-neighbor is left out
/// on purpose since it produces jagged icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResampleFilter {
    Lanczos3,
    CatmullRom,
    Gaussian,
    Triangle,
}

impl From<ResampleFilter> for FilterType {
    fn from(filter: ResampleFilter) -> Self {
        match filter {
            ResampleFilter::Lanczos3 => FilterType::Lanczos3,
            ResampleFilter::CatmullRom => FilterType::CatmullRom,
            ResampleFilter::Gaussian => FilterType::Gaussian,
            ResampleFilter::Triangle => FilterType::Triangle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let args = Args::try_parse_from(["icon-resizer"]).unwrap();
        assert_eq!(args.source, PathBuf::from(DEFAULT_SOURCE_ICON));
        assert_eq!(args.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
        assert_eq!(args.sizes, vec![16, 48, 128]);
        assert_eq!(args.prefix, "icon");
        assert_eq!(args.filter, ResampleFilter::Lanczos3);
        assert_eq!(args.optimize, None);
        assert!(!args.quiet);
        assert!(!args.verbose);
    }

    #[test]
    fn test_custom_sizes_keep_order() {
        let args = Args::try_parse_from(["icon-resizer", "--sizes", "128,16,32"]).unwrap();
        assert_eq!(args.sizes, vec![128, 16, 32]);
    }

    #[test]
    fn test_zero_size_rejected() {
        let result = Args::try_parse_from(["icon-resizer", "--sizes", "16,0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_optimize_level_range() {
        let args = Args::try_parse_from(["icon-resizer", "-O", "6"]).unwrap();
        assert_eq!(args.optimize, Some(6));

        let result = Args::try_parse_from(["icon-resizer", "-O", "7"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_nearest_filter_not_offered() {
        let result = Args::try_parse_from(["icon-resizer", "--filter", "nearest"]);
        assert!(result.is_err());

        let args = Args::try_parse_from(["icon-resizer", "-F", "catmull-rom"]).unwrap();
        assert_eq!(FilterType::from(args.filter), FilterType::CatmullRom);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Args::try_parse_from(["icon-resizer", "-q", "-v"]);
        assert!(result.is_err());
    }
}
