//! Output directory layout
//!
//! ```text
//! <input dir>/<name>_output/
//!     DXF/<name>-mono.dxf
//!     DXF/<name>-multi.dxf
//!     DXF/<name>-multi_colored.dxf
//!     DXF/Singles/HEX_<hex>.dxf
//!     PNG/<name>_print.png
//!     PNG/Single-Color/HEX_<hex>.png
//! ```

use pixcut_core::ColorKey;
use pixcut_emit::GroupingMode;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Paths of every output of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    name: String,
    root: PathBuf,
}

impl OutputLayout {
    /// Layout for outputs named `name`, next to `input`.
    pub fn new(input: &Path, name: &str) -> Self {
        let dir = input.parent().unwrap_or(Path::new(""));
        Self {
            name: name.to_string(),
            root: dir.join(format!("{name}_output")),
        }
    }

    /// Output base name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The output folder
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn dxf_dir(&self) -> PathBuf {
        self.root.join("DXF")
    }

    pub fn singles_dir(&self) -> PathBuf {
        self.dxf_dir().join("Singles")
    }

    pub fn png_dir(&self) -> PathBuf {
        self.root.join("PNG")
    }

    pub fn masks_dir(&self) -> PathBuf {
        self.png_dir().join("Single-Color")
    }

    /// Path of a combined document.
    pub fn combined_dxf(&self, mode: GroupingMode) -> PathBuf {
        self.dxf_dir()
            .join(format!("{}-{}.dxf", self.name, mode.suffix()))
    }

    /// Path of a document named `stem` in the mode's directory.
    pub fn document_path(&self, mode: GroupingMode, stem: &str) -> PathBuf {
        match mode {
            GroupingMode::Singles => self.singles_dir().join(format!("{stem}.dxf")),
            _ => self.dxf_dir().join(format!("{stem}.dxf")),
        }
    }

    /// Path of the per-color document.
    pub fn single_dxf(&self, key: ColorKey) -> PathBuf {
        self.document_path(GroupingMode::Singles, &key.file_stem())
    }

    /// Path of the print preview.
    pub fn preview_png(&self) -> PathBuf {
        self.png_dir().join(format!("{}_print.png", self.name))
    }

    /// Path of the per-color mask.
    pub fn mask_png(&self, key: ColorKey) -> PathBuf {
        self.masks_dir().join(format!("{}.png", key.file_stem()))
    }

    /// Delete any previous output folder and recreate the directory tree.
    pub fn prepare(&self) -> io::Result<()> {
        if self.root.exists() {
            log::warn!("replacing existing output folder {}", self.root.display());
            fs::remove_dir_all(&self.root)?;
        }
        for dir in [self.singles_dir(), self.masks_dir()] {
            fs::create_dir_all(dir)?;
        }
        log::debug!("created output tree under {}", self.root.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        let layout = OutputLayout::new(Path::new("art/cat.png"), "cat");
        let key = ColorKey::from_rgb(255, 0, 0);

        assert_eq!(layout.root(), Path::new("art/cat_output"));
        assert_eq!(
            layout.combined_dxf(GroupingMode::MultiColored),
            Path::new("art/cat_output/DXF/cat-multi_colored.dxf")
        );
        assert_eq!(
            layout.single_dxf(key),
            Path::new("art/cat_output/DXF/Singles/HEX_FF0000.dxf")
        );
        assert_eq!(
            layout.preview_png(),
            Path::new("art/cat_output/PNG/cat_print.png")
        );
        assert_eq!(
            layout.mask_png(key),
            Path::new("art/cat_output/PNG/Single-Color/HEX_FF0000.png")
        );
    }

    #[test]
    fn test_bare_file_name() {
        let layout = OutputLayout::new(Path::new("cat.png"), "kitty");
        assert_eq!(layout.root(), Path::new("kitty_output"));
    }

    #[test]
    fn test_prepare_replaces_old_output() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = OutputLayout::new(&tmp.path().join("in.png"), "in");
        layout.prepare().unwrap();
        fs::write(layout.dxf_dir().join("stale.dxf"), b"old").unwrap();

        layout.prepare().unwrap();
        assert!(!layout.dxf_dir().join("stale.dxf").exists());
        assert!(layout.singles_dir().is_dir());
        assert!(layout.masks_dir().is_dir());
    }
}
