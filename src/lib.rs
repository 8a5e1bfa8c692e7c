pub mod cli;
pub mod constants;
pub mod error;
pub mod logger;
pub mod resize;
pub mod utils;

pub use cli::{Args, ResampleFilter};
pub use error::{IconError, Result};
pub use resize::{
    generate_icons, icon_output_path, load_source_image, resize_to_square, save_icon,
    write_icons, IconOptions,
};
