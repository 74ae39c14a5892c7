//! PNG export of the painted canvas.
//!
//! The canvas is copied pixel by pixel onto a [`SimulatorDisplay`], which
//! renders it with an e-paper look and writes the image file.

use std::path::Path;

use anyhow::{Context, Result};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{BinaryColorTheme, OutputSettings, OutputSettingsBuilder, SimulatorDisplay};
use tramwise_common::EpaperCanvas;

/// Upscaling factor of the exported image.
pub const PNG_SCALE: u32 = 2;

fn output_settings() -> OutputSettings {
    OutputSettingsBuilder::new()
        .theme(BinaryColorTheme::LcdWhite)
        .scale(PNG_SCALE)
        .build()
}

/// Transfer `canvas` onto a simulator display of the same size.
pub fn to_display(canvas: &EpaperCanvas) -> SimulatorDisplay<BinaryColor> {
    let mut display = SimulatorDisplay::new(canvas.size());
    display.draw_iter(canvas.pixels()).ok();
    display
}

/// Save `canvas` as a PNG at `path`.
pub fn save_png(
    canvas: &EpaperCanvas,
    path: &Path,
) -> Result<()> {
    to_display(canvas)
        .to_rgb_output_image(&output_settings())
        .save_png(path)
        .with_context(|| format!("Failed to write {}", path.display()))
}
