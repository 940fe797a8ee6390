use std::path::PathBuf;

pub const DEFAULT_OUTPUT_DIR: &str = "icons";
pub const DEFAULT_SIZES: [u32; 3] = [16, 48, 128];
pub const SYSTEM_FONT_PATH: &str = "/System/Library/Fonts/Arial.ttf";

/// Settings for one generator run. The defaults are the program's behavior;
/// nothing is read from disk, arguments or the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconConfig {
    pub output_dir: PathBuf,
    /// Rendered in this order, one file per entry.
    pub sizes: Vec<u32>,
    /// Preferred glyph font; the built-in font is used when it can't be loaded.
    pub font_path: PathBuf,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            sizes: DEFAULT_SIZES.to_vec(),
            font_path: PathBuf::from(SYSTEM_FONT_PATH),
        }
    }
}

impl IconConfig {
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_font_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.font_path = path.into();
        self
    }

    pub fn icon_file_name(size: u32) -> String {
        format!("icon{}.png", size)
    }

    pub fn output_path(&self, size: u32) -> PathBuf {
        self.output_dir.join(Self::icon_file_name(size))
    }
}
