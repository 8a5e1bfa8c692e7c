use crate::constants::{
    DEFAULT_ICON_PREFIX, DEFAULT_ICON_SIZES, DEFAULT_OUTPUT_DIR, DEFAULT_SOURCE_ICON,
    GENERATED_PREFIX, ICON_EXTENSION, MAX_ICON_SIZE, MAX_OPTIMIZATION_LEVEL,
};
use crate::error::{IconError, Result};
use crate::utils::create_progress_spinner;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct IconOptions {
    pub source: PathBuf,
    pub output_dir: PathBuf,
    pub sizes: Vec<u32>,
    pub prefix: String,
    pub filter: FilterType,
    pub optimize: Option<u8>,
}

impl IconOptions {
    pub fn new(
        source: PathBuf,
        output_dir: PathBuf,
        sizes: Vec<u32>,
        prefix: String,
        filter: FilterType,
        optimize: Option<u8>,
    ) -> Result<Self> {
        if let Some(&size) = sizes
            .iter()
            .find(|&&s| s == 0 || s > MAX_ICON_SIZE)
        {
            return Err(IconError::InvalidSize(size, MAX_ICON_SIZE));
        }

        if prefix.is_empty() || prefix.contains(&['/', '\\'][..]) {
            return Err(IconError::InvalidPrefix(prefix));
        }

        if let Some(level) = optimize.filter(|&l| l > MAX_OPTIMIZATION_LEVEL) {
            return Err(IconError::InvalidOptimizationLevel(level));
        }

        for (i, size) in sizes.iter().enumerate() {
            if sizes[..i].contains(size) {
                crate::warn!(
                    "size {} is listed more than once; {}{}.{} will be written again",
                    size,
                    prefix,
                    size,
                    ICON_EXTENSION
                );
            }
        }

        Ok(Self {
            source,
            output_dir,
            sizes,
            prefix,
            filter,
            optimize,
        })
    }
}

impl Default for IconOptions {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE_ICON),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            sizes: DEFAULT_ICON_SIZES.to_vec(),
            prefix: DEFAULT_ICON_PREFIX.to_string(),
            filter: FilterType::Lanczos3,
            optimize: None,
        }
    }
}

/// Loads and decodes the source image.
///
/// # Arguments
/// * `path` - Path to the source image
///
/// # Returns
/// * `Ok(image)` - The decoded image
/// * `Err(IconError)` - If the file is missing or cannot be decoded
///
/// The format is sniffed from the file contents, so a PNG saved with the wrong
/// extension still loads. No size or dimension cap is applied beyond the
/// decoder's default allocation limit (`image::Limits::default()`).
pub fn load_source_image(path: &Path) -> Result<DynamicImage> {
    if !path.exists() {
        return Err(IconError::FileNotFound(path.to_path_buf()));
    }

    let img = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    Ok(img)
}

/// Resamples `img` to exactly `size` x `size`. The aspect ratio is not
/// preserved: a non-square source is stretched, never letterboxed.
pub fn resize_to_square(img: &DynamicImage, size: u32, filter: FilterType) -> DynamicImage {
    img.resize_exact(size, size, filter)
}

pub fn icon_output_path(output_dir: &Path, prefix: &str, size: u32) -> PathBuf {
    output_dir.join(format!("{}{}.{}", prefix, size, ICON_EXTENSION))
}

/// Encodes `img` as PNG and writes it to `path`, returning the number of bytes
/// written. With `optimize` set, the encoded PNG is recompressed by oxipng at
/// that preset first.
///
/// The parent directory is not created; writing into a missing directory fails
/// with `IconError::WriteFailed` naming `path`.
pub fn save_icon(img: &DynamicImage, path: &Path, optimize: Option<u8>) -> Result<u64> {
    let mut encoded = Vec::new();
    img.write_to(&mut Cursor::new(&mut encoded), ImageFormat::Png)?;

    if let Some(level) = optimize {
        let options = oxipng::Options::from_preset(level);
        encoded = oxipng::optimize_from_memory(&encoded, &options)
            .map_err(|e| IconError::PngOptimization(e.to_string()))?;
    }

    fs::write(path, &encoded).map_err(|source| IconError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(encoded.len() as u64)
}

/// Writes one icon per requested size, in list order.
///
/// Stops at the first failure. Icons written before the failure stay on disk.
pub fn write_icons(img: &DynamicImage, options: &IconOptions) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(options.sizes.len());

    for &size in &options.sizes {
        let resized = resize_to_square(img, size, options.filter);
        let output_path = icon_output_path(&options.output_dir, &options.prefix, size);
        let bytes = save_icon(&resized, &output_path, options.optimize)?;

        crate::info!("{} {}", GENERATED_PREFIX, output_path.display());
        crate::verbose!("{}x{}, {} bytes", size, size, bytes);
        written.push(output_path);
    }

    Ok(written)
}

/// Loads the source image and writes every icon described by `options`.
pub fn generate_icons(options: &IconOptions) -> Result<Vec<PathBuf>> {
    let pb = create_progress_spinner("Loading source image...");
    let loaded = load_source_image(&options.source);
    pb.finish_and_clear();
    let img = loaded?;

    crate::verbose!(
        "Source {}: {}x{} {:?}",
        options.source.display(),
        img.width(),
        img.height(),
        img.color()
    );

    write_icons(&img, options)
}
