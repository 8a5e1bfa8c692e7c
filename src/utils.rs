use crate::constants::PROGRESS_SPINNER_TEMPLATE;
use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress spinner with consistent styling
///
/// The spinner draws to stderr and stays hidden when stderr is not a terminal,
/// so it never mixes with the `Generated` lines on stdout.
pub fn create_progress_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template(PROGRESS_SPINNER_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_progress_spinner_keeps_message() {
        let pb = create_progress_spinner("Loading source image...");
        assert_eq!(pb.message(), "Loading source image...");
        pb.finish_and_clear();
    }
}
