use std::path::Path;

use crate::error::AssetError;

/// Pixel dimensions of a decoded sprite. The pixels themselves stay with the
/// renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteImage {
    pub width: u32,
    pub height: u32,
}

impl SpriteImage {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

pub trait AssetLoader {
    fn load_sprite(&self, path: &Path) -> Result<SpriteImage, AssetError>;
}
