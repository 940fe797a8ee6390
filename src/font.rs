use std::borrow::Cow;
use std::fs;
use std::path::Path;

use ab_glyph::{Font, FontArc, FontRef, FontVec, PxScale};
use egui::{FontData, FontDefinitions, FontFamily};

use crate::error::{FontError, IconError};

/// Outcome of font loading. A fallback is a normal result, not an error.
pub enum FontLoad {
    Preferred(FontArc),
    Fallback { font: FontArc, reason: FontError },
}

impl FontLoad {
    pub fn font(&self) -> &FontArc {
        match self {
            FontLoad::Preferred(font) => font,
            FontLoad::Fallback { font, .. } => font,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, FontLoad::Fallback { .. })
    }
}

/// Load the font at `path`, substituting the built-in font on any failure.
/// Only a broken built-in font is an error.
pub fn load_font(path: &Path) -> Result<FontLoad, IconError> {
    match read_font_file(path) {
        Ok(font) => Ok(FontLoad::Preferred(font)),
        Err(reason) => {
            log::debug!("falling back to built-in font: {}", reason);
            Ok(FontLoad::Fallback { font: builtin_font()?, reason })
        }
    }
}

pub fn read_font_file(path: &Path) -> Result<FontArc, FontError> {
    let bytes = fs::read(path).map_err(|source| FontError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    FontArc::try_from_vec(bytes).map_err(|_| FontError::Parse { path: path.to_path_buf() })
}

// Head of egui's proportional family, embedded at compile time.
fn builtin_font_data() -> Result<FontData, IconError> {
    let mut defs = FontDefinitions::default();
    let name = defs
        .families
        .get(&FontFamily::Proportional)
        .and_then(|names| names.first())
        .cloned()
        .ok_or_else(|| IconError::BuiltinFont("no proportional font family".to_string()))?;
    defs.font_data
        .remove(&name)
        .ok_or_else(|| IconError::BuiltinFont(format!("missing font data for {}", name)))
}

pub fn builtin_font() -> Result<FontArc, IconError> {
    let data = builtin_font_data()?;
    let parsed = match data.font {
        Cow::Borrowed(bytes) => FontRef::try_from_slice_and_index(bytes, data.index).map(FontArc::new),
        Cow::Owned(bytes) => FontVec::try_from_vec_and_index(bytes, data.index).map(FontArc::new),
    };
    parsed.map_err(|e| IconError::BuiltinFont(e.to_string()))
}

/// Scale for an em size given in pixels. ab_glyph scales by line height,
/// so the em is converted through the font's units.
pub fn px_scale(font: &FontArc, em_px: u32) -> PxScale {
    let em = em_px as f32;
    match font.units_per_em() {
        Some(units) if units > 0.0 => PxScale::from(em * font.height_unscaled() / units),
        _ => PxScale::from(em),
    }
}
