use image::{DynamicImage, Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const DEFAULT_ICON_NAMES: [&str; 3] = ["icon16.png", "icon48.png", "icon128.png"];

pub fn create_temp_directory() -> TempDir {
    TempDir::new().unwrap()
}

/// Writes a gradient PNG of the given size to `path`.
pub fn create_test_png(path: &Path, width: u32, height: u32) {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x * 255 / width) as u8, (y * 255 / height) as u8, 90, 255])
    });
    DynamicImage::ImageRgba8(img).save(path).unwrap();
}

/// Lays out `src/icons/app_icon_v2.png` under `root`, mirroring the default
/// source location, and returns the icons directory.
pub fn create_default_layout(root: &Path, width: u32, height: u32) -> PathBuf {
    let icons_dir = root.join("src").join("icons");
    std::fs::create_dir_all(&icons_dir).unwrap();
    create_test_png(&icons_dir.join("app_icon_v2.png"), width, height);
    icons_dir
}
