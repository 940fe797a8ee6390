use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};

use crate::config::IconConfig;
use crate::error::IconError;
use crate::icon;

pub fn ensure_output_dir(dir: &Path) -> Result<(), IconError> {
    fs::create_dir_all(dir).map_err(|source| IconError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

pub fn save_icon(img: &RgbaImage, path: &Path) -> Result<(), IconError> {
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|source| IconError::Save {
            path: path.to_path_buf(),
            source,
        })
}

/// Render and write every configured size in order, printing one
/// `Created icon{size}.png` line per file to `out`. Stops at the first
/// failure; files already written are left in place.
pub fn run<W: Write>(cfg: &IconConfig, out: &mut W) -> Result<Vec<PathBuf>, IconError> {
    ensure_output_dir(&cfg.output_dir)?;
    let mut written = Vec::with_capacity(cfg.sizes.len());
    for &size in &cfg.sizes {
        let img = icon::render(size, cfg)?;
        let path = cfg.output_path(size);
        save_icon(&img, &path)?;
        log::debug!("wrote {}", path.display());
        writeln!(out, "Created {}", IconConfig::icon_file_name(size))?;
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(dir: &Path) -> IconConfig {
        IconConfig::default()
            .with_output_dir(dir.join("icons"))
            .with_font_path(dir.join("missing.ttf"))
    }

    fn file_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_run_writes_all_sizes() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = test_config(tmp.path());
        let mut out = Vec::new();

        let written = run(&cfg, &mut out).unwrap();

        assert_eq!(written.len(), 3);
        assert_eq!(file_names(&cfg.output_dir), vec!["icon128.png", "icon16.png", "icon48.png"]);
        for size in [16u32, 48, 128] {
            let img = image::open(cfg.output_path(size)).unwrap();
            assert_eq!(image::GenericImageView::dimensions(&img), (size, size));
            assert_eq!(img.color(), image::ColorType::Rgba8);
        }
        let stdout = String::from_utf8(out).unwrap();
        assert_eq!(
            stdout.lines().collect::<Vec<_>>(),
            vec!["Created icon16.png", "Created icon48.png", "Created icon128.png"]
        );
    }

    #[test]
    fn test_run_twice_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = test_config(tmp.path());

        run(&cfg, &mut Vec::new()).unwrap();
        let first = fs::read(cfg.output_path(48)).unwrap();
        let mut out = Vec::new();
        run(&cfg, &mut out).unwrap();

        assert_eq!(file_names(&cfg.output_dir).len(), 3);
        assert_eq!(fs::read(cfg.output_path(48)).unwrap(), first);
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 3);
    }

    #[test]
    fn test_existing_dir_keeps_unrelated_files() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = test_config(tmp.path());
        fs::create_dir_all(&cfg.output_dir).unwrap();
        let notes = cfg.output_dir.join("notes.txt");
        fs::write(&notes, "keep me").unwrap();

        run(&cfg, &mut Vec::new()).unwrap();

        assert_eq!(fs::read_to_string(&notes).unwrap(), "keep me");
        assert_eq!(file_names(&cfg.output_dir).len(), 4);
    }

    #[test]
    fn test_nested_output_dir_is_created() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = test_config(tmp.path()).with_output_dir(tmp.path().join("a/b/icons"));
        run(&cfg, &mut Vec::new()).unwrap();
        assert!(cfg.output_path(16).is_file());
    }

    #[test]
    fn test_unusable_output_dir_aborts() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("icons");
        fs::write(&blocker, "not a directory").unwrap();
        let cfg = test_config(tmp.path());
        let mut out = Vec::new();

        let err = run(&cfg, &mut out).unwrap_err();

        assert!(matches!(err, IconError::CreateDir { .. }));
        assert!(out.is_empty());
    }

    #[test]
    fn test_save_failure_aborts_and_keeps_earlier_files() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = test_config(tmp.path());
        fs::create_dir_all(cfg.output_path(48)).unwrap();
        let mut out = Vec::new();

        let err = run(&cfg, &mut out).unwrap_err();

        assert!(matches!(err, IconError::Save { ref path, .. } if *path == cfg.output_path(48)));
        assert!(cfg.output_path(16).is_file());
        assert!(!cfg.output_path(128).exists());
        assert_eq!(String::from_utf8(out).unwrap(), "Created icon16.png\n");
    }

    #[test]
    fn test_invalid_size_stops_after_earlier_files() {
        let tmp = tempfile::tempdir().unwrap();
        let mut cfg = test_config(tmp.path());
        cfg.sizes = vec![16, 0, 48];
        let mut out = Vec::new();

        let err = run(&cfg, &mut out).unwrap_err();

        assert!(matches!(err, IconError::InvalidSize(0)));
        assert!(cfg.output_path(16).is_file());
        assert!(!cfg.output_path(48).exists());
        assert_eq!(String::from_utf8(out).unwrap(), "Created icon16.png\n");
    }
}
