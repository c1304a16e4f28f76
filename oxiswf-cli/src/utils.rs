//! Utility functions for the CLI.

use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar with standard styling.
pub fn create_progress_bar(len: u64, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files {msg}")
            .expect("progress bar template is valid")
            .progress_chars("█▓▒░ "),
    );
    pb
}

/// Format a bit count as `N bits (M bytes)`, rounding bytes up.
pub fn format_bits(bits: u64) -> String {
    format!("{} bits ({} bytes)", bits, bits.div_ceil(8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bits() {
        assert_eq!(format_bits(0), "0 bits (0 bytes)");
        assert_eq!(format_bits(21), "21 bits (3 bytes)");
        assert_eq!(format_bits(64), "64 bits (8 bytes)");
    }
}
