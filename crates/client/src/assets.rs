//! Sprite loading and the process-wide sprite atlas.
//!
//! The target sprite is decoded from disk once at startup. Every other bitmap
//! is a plain filled rectangle whose size comes from the game config. The atlas
//! is initialised once before the first frame and is read-only afterwards.

use std::io;
use std::path::Path;
use std::sync::OnceLock;

use cannonbattle::{AssetError, AssetLoader, GameConfig, SpriteId, SpriteImage};
use ratatui::style::Color;

static ATLAS: OnceLock<SpriteAtlas> = OnceLock::new();

/// Decodes sprites from the local filesystem.
pub struct DiskAssets;

impl AssetLoader for DiskAssets {
    fn load_sprite(&self, path: &Path) -> Result<SpriteImage, AssetError> {
        let image = image::open(path).map_err(|e| match e {
            image::ImageError::IoError(ref err) if err.kind() == io::ErrorKind::NotFound => {
                AssetError::NotFound {
                    path: path.to_path_buf(),
                }
            }
            other => AssetError::Decode {
                path: path.to_path_buf(),
                reason: other.to_string(),
            },
        })?;

        log::debug!(
            "Loaded sprite {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        Ok(SpriteImage::new(image.width(), image.height()))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SpriteAtlas {
    barrel: SpriteImage,
    shot: SpriteImage,
    path_marker: SpriteImage,
    target: SpriteImage,
}

impl SpriteAtlas {
    pub fn new(config: &GameConfig, target: SpriteImage) -> Self {
        Self {
            barrel: SpriteImage::new(
                config.launcher.barrel_width as u32,
                config.launcher.barrel_length as u32,
            ),
            shot: SpriteImage::new(20, 20),
            path_marker: SpriteImage::new(10, 10),
            target,
        }
    }

    pub fn size(&self, sprite: SpriteId) -> SpriteImage {
        match sprite {
            SpriteId::Barrel => self.barrel,
            SpriteId::Shot => self.shot,
            SpriteId::PathMarker => self.path_marker,
            SpriteId::Target => self.target,
        }
    }

    pub fn color(&self, sprite: SpriteId) -> Color {
        match sprite {
            SpriteId::Barrel => Color::Black,
            SpriteId::Shot => Color::White,
            SpriteId::PathMarker => Color::Red,
            SpriteId::Target => Color::LightMagenta,
        }
    }
}

/// The first call wins; later calls return the atlas already in place.
pub fn init_atlas(config: &GameConfig, target: SpriteImage) -> &'static SpriteAtlas {
    ATLAS.get_or_init(|| SpriteAtlas::new(config, target))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn bundled_sprite() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/enemy.png")
    }

    #[test]
    fn decodes_bundled_sprite() {
        let sprite = DiskAssets.load_sprite(&bundled_sprite()).unwrap();
        assert_eq!(sprite, SpriteImage::new(120, 160));
    }

    #[test]
    fn missing_sprite_is_not_found() {
        let err = DiskAssets
            .load_sprite(Path::new("does/not/exist.png"))
            .unwrap_err();
        assert!(matches!(err, AssetError::NotFound { .. }));
    }

    #[test]
    fn undecodable_sprite_is_a_decode_error() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
        let err = DiskAssets.load_sprite(&path).unwrap_err();
        assert!(matches!(err, AssetError::Decode { .. }));
    }

    #[test]
    fn atlas_is_initialised_once() {
        let config = GameConfig::default();
        let first = init_atlas(&config, SpriteImage::new(120, 160));
        let second = init_atlas(&config, SpriteImage::new(1, 1));
        assert!(std::ptr::eq(first, second));
        assert_eq!(second.size(SpriteId::Target), first.size(SpriteId::Target));
        assert_eq!(first.size(SpriteId::Barrel), SpriteImage::new(50, 200));
        assert!(ATLAS.get().is_some());
    }
}
