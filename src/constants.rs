pub const DEFAULT_SOURCE_ICON: &str = "src/icons/app_icon_v2.png";
pub const DEFAULT_OUTPUT_DIR: &str = "src/icons";
pub const DEFAULT_ICON_SIZES: [u32; 3] = [16, 48, 128];
pub const DEFAULT_ICON_PREFIX: &str = "icon";
pub const ICON_EXTENSION: &str = "png";

/// Largest requested icon edge in pixels
pub const MAX_ICON_SIZE: u32 = 16384;

pub const MIN_OPTIMIZATION_LEVEL: u8 = 0;
pub const MAX_OPTIMIZATION_LEVEL: u8 = 6;

pub const PROGRESS_SPINNER_TEMPLATE: &str = "{spinner:.green} {msg}";

pub const GENERATED_PREFIX: &str = "Generated";
pub const ERROR_PREFIX: &str = "Error:";
