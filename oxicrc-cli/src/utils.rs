//! Utility functions for the CLI.

use indicatif::{ProgressBar, ProgressStyle};
use oxicrc_kernels::Kernel;

/// Create a progress bar with standard styling.
pub fn create_progress_bar(len: u64, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let style = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░ ");
    let pb = ProgressBar::new(len);
    pb.set_style(style);
    pb
}

/// One result line in the self-test layout: name padded to 36 columns.
pub fn format_result(name: &str, crc: u32) -> String {
    format!("{:<36} => 0x{:08x}", name, crc)
}

/// Resolve an optional kernel name to the kernels to run.
pub fn select_kernels(
    name: Option<&str>,
) -> Result<Vec<&'static Kernel>, oxicrc_core::OxiCrcError> {
    match name {
        Some(name) => Ok(vec![oxicrc_kernels::find(name)?]),
        None => Ok(oxicrc_kernels::KERNELS.iter().collect()),
    }
}
