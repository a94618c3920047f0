//! Optional image and sound assets
//!
//! Every asset is optional. The renderer falls back to primitive shapes and
//! audio goes silent for anything the catalog does not have.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Logical asset names
pub mod names {
    pub const BACKGROUND: &str = "space.png";
    pub const SHIP_LEFT: &str = "spaceship_yellow.png";
    pub const SHIP_RIGHT: &str = "spaceship_red.png";
    pub const METEOR: &str = "meteor.png";
    pub const LASER: &str = "laser.wav";
    pub const EXPLOSION: &str = "explosion.wav";
}

/// Default asset directory, relative to the working directory
pub const ASSET_DIR: &str = "Assets";

#[derive(thiserror::Error, Debug)]
pub enum AssetError {
    #[error("asset directory {path:?} is unreadable: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Answers which logical assets are available
pub trait AssetCatalog {
    fn has_image(&self, name: &str) -> bool;
    fn has_sound(&self, name: &str) -> bool;
}

/// Catalog with nothing in it: everything uses the fallback path
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAssets;

impl AssetCatalog for NoAssets {
    fn has_image(&self, _name: &str) -> bool {
        false
    }

    fn has_sound(&self, _name: &str) -> bool {
        false
    }
}

/// Assets discovered in a directory
#[derive(Debug, Clone, Default)]
pub struct AssetManifest {
    root: PathBuf,
    images: BTreeSet<String>,
    sounds: BTreeSet<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AssetKind {
    Image,
    Sound,
}

fn classify(path: &Path) -> Option<AssetKind> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" | "jpg" | "jpeg" | "bmp" => Some(AssetKind::Image),
        "wav" | "ogg" | "mp3" => Some(AssetKind::Sound),
        _ => None,
    }
}

impl AssetManifest {
    /// List the image and sound files directly inside `dir`
    pub fn scan(dir: impl AsRef<Path>) -> Result<Self, AssetError> {
        let root = dir.as_ref().to_path_buf();
        let unreadable = |source| AssetError::Unreadable {
            path: root.clone(),
            source,
        };

        let mut manifest = Self {
            root: root.clone(),
            ..Default::default()
        };
        for entry in fs::read_dir(&root).map_err(unreadable)? {
            let path = entry.map_err(unreadable)?.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            match classify(&path) {
                Some(AssetKind::Image) => {
                    manifest.images.insert(name.to_string());
                }
                Some(AssetKind::Sound) => {
                    manifest.sounds.insert(name.to_string());
                }
                None => {}
            }
        }

        log::info!(
            "Found {} images and {} sounds in {:?}",
            manifest.images.len(),
            manifest.sounds.len(),
            manifest.root
        );
        Ok(manifest)
    }

    /// Like `scan`, but a missing directory just means no assets
    pub fn scan_or_empty(dir: impl AsRef<Path>) -> Self {
        match Self::scan(&dir) {
            Ok(manifest) => manifest,
            Err(e) => {
                log::warn!("{e}; using primitive shapes and no sound");
                Self {
                    root: dir.as_ref().to_path_buf(),
                    ..Default::default()
                }
            }
        }
    }

    /// Manifest built from known names (no filesystem access)
    pub fn from_names<'a>(
        images: impl IntoIterator<Item = &'a str>,
        sounds: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self {
            root: PathBuf::from(ASSET_DIR),
            images: images.into_iter().map(str::to_string).collect(),
            sounds: sounds.into_iter().map(str::to_string).collect(),
        }
    }

    /// Full path for a known asset
    pub fn path_of(&self, name: &str) -> Option<PathBuf> {
        (self.images.contains(name) || self.sounds.contains(name)).then(|| self.root.join(name))
    }
}

impl AssetCatalog for AssetManifest {
    fn has_image(&self, name: &str) -> bool {
        self.images.contains(name)
    }

    fn has_sound(&self, name: &str) -> bool {
        self.sounds.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_classifies_files() {
        let dir = std::env::temp_dir().join(format!("space_fight_assets_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(names::METEOR), b"png").unwrap();
        fs::write(dir.join(names::LASER), b"wav").unwrap();
        fs::write(dir.join("notes.txt"), b"txt").unwrap();

        let manifest = AssetManifest::scan(&dir).unwrap();
        assert!(manifest.has_image(names::METEOR));
        assert!(!manifest.has_image(names::BACKGROUND));
        assert!(manifest.has_sound(names::LASER));
        assert!(!manifest.has_sound("notes.txt"));
        assert_eq!(manifest.path_of(names::LASER), Some(dir.join(names::LASER)));
        assert_eq!(manifest.path_of("notes.txt"), None);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_dir_degrades() {
        let missing = std::env::temp_dir().join("space_fight_definitely_missing_dir");
        assert!(matches!(
            AssetManifest::scan(&missing),
            Err(AssetError::Unreadable { .. })
        ));
        let manifest = AssetManifest::scan_or_empty(&missing);
        assert!(!manifest.has_image(names::SHIP_LEFT));
        assert!(!manifest.has_sound(names::EXPLOSION));
    }

    #[test]
    fn test_no_assets() {
        assert!(!NoAssets.has_image(names::BACKGROUND));
        assert!(!NoAssets.has_sound(names::LASER));
    }
}
