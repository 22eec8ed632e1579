//! Document export settings for the results page.
//!
//! Rendering happens client-side; the service only publishes the page
//! contract so every client produces the same document.

use serde::Serialize;

pub const EXPORT_FILENAME: &str = "career-roadmap.pdf";

/// US letter, portrait, 1" margins, 2x rasterization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportSettings {
    pub filename: &'static str,
    pub page_format: &'static str,
    pub orientation: &'static str,
    pub unit: &'static str,
    pub margin: f32,
    pub raster_scale: u8,
    pub image_quality: f32,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            filename: EXPORT_FILENAME,
            page_format: "letter",
            orientation: "portrait",
            unit: "in",
            margin: 1.0,
            raster_scale: 2,
            image_quality: 0.98,
        }
    }
}
