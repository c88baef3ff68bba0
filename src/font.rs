// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Font resolution for text annotations.
//!
//! Fonts are cached in the user config directory and downloaded from the
//! assets release on first use.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use ab_glyph::FontVec;

use crate::error::{AnnotateError, Result};
use crate::verbose;

/// Assets URL for downloading fonts
const ASSETS_URL: &str = "https://github.com/ultralytics/assets/releases/download/v0.0.0";

/// Font used for text annotations.
const DEFAULT_FONT: &str = "Arial.ttf";

static FONT: OnceLock<Option<FontVec>> = OnceLock::new();

/// Check if font exists locally or download it
pub fn check_font(font: &str) -> Option<PathBuf> {
    let font_name = Path::new(font).file_name()?.to_string_lossy();
    let config_dir = dirs::config_dir()?.join("Ultralytics");
    let font_path = config_dir.join(font_name.as_ref());

    if font_path.exists() {
        return Some(font_path);
    }

    if let Err(e) = fs::create_dir_all(&config_dir) {
        crate::error!("Failed to create config directory: {e}");
        return None;
    }

    let url = format!("{ASSETS_URL}/{font_name}");
    verbose!("Downloading {url} to {}", font_path.display());

    match ureq::get(&url).call() {
        Ok(response) => {
            let mut file = match File::create(&font_path) {
                Ok(f) => f,
                Err(e) => {
                    crate::error!("Failed to create font file: {e}");
                    return None;
                }
            };

            let mut reader = response.into_body().into_reader();
            if let Err(e) = io::copy(&mut reader, &mut file) {
                crate::error!("Failed to download font: {e}");
                // Try to remove partial file
                let _ = fs::remove_file(&font_path);
                return None;
            }

            Some(font_path)
        }
        Err(e) => {
            crate::error!("Failed to download font from {url}: {e}");
            None
        }
    }
}

/// The font used for all text annotations, loaded once per process.
///
/// # Errors
///
/// Returns `FontError` if the font could not be resolved or parsed. The
/// failure is cached; later calls fail fast without retrying the download.
pub fn default_font() -> Result<&'static FontVec> {
    FONT.get_or_init(|| {
        let path = check_font(DEFAULT_FONT)?;
        let data = fs::read(path).ok()?;
        FontVec::try_from_vec(data).ok()
    })
    .as_ref()
    .ok_or_else(|| AnnotateError::FontError(format!("failed to load {DEFAULT_FONT}")))
}
