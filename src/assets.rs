//! Asset registry
//!
//! Built once at startup and handed to the render surface. Images are keyed
//! by their path relative to the assets directory and loaded on first use.
//! A file that fails to load is remembered as missing, logged once, and
//! simply not drawn afterwards.

use sdl2::image::LoadTexture;
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Main menu background image
pub const MAIN_MENU_BACKGROUND: &str = "gui/main_menu_bg.png";

/// Generic texture loading helper with consistent error text
pub fn load_texture<'t>(
    texture_creator: &'t TextureCreator<WindowContext>,
    path: &Path,
) -> Result<Texture<'t>, String> {
    texture_creator
        .load_texture(path)
        .map_err(|e| format!("Failed to load {}: {}", path.display(), e))
}

pub struct AssetRegistry<'t> {
    texture_creator: &'t TextureCreator<WindowContext>,
    root: PathBuf,
    images: HashMap<String, Option<Texture<'t>>>,
}

impl<'t> AssetRegistry<'t> {
    pub fn new(texture_creator: &'t TextureCreator<WindowContext>, root: impl Into<PathBuf>) -> Self {
        AssetRegistry {
            texture_creator,
            root: root.into(),
            images: HashMap::new(),
        }
    }

    /// Loads the given keys up front so the first frame does not stall
    pub fn preload(&mut self, keys: &[&str]) {
        for key in keys {
            self.image(key);
        }
    }

    /// Looks up an image, loading it on first request
    ///
    /// Keys may also be absolute or working-directory-relative paths (dialogue
    /// portraits); they are tried as given when not found under the root.
    pub fn image(&mut self, key: &str) -> Option<&Texture<'t>> {
        if !self.images.contains_key(key) {
            let loaded = self.load(key);
            self.images.insert(key.to_string(), loaded);
        }
        self.images.get(key).and_then(|t| t.as_ref())
    }

    fn load(&self, key: &str) -> Option<Texture<'t>> {
        let under_root = self.root.join(key);
        let path = if under_root.exists() {
            under_root
        } else {
            PathBuf::from(key)
        };

        match load_texture(self.texture_creator, &path) {
            Ok(texture) => {
                log::debug!("Loaded image {}", path.display());
                Some(texture)
            }
            Err(e) => {
                log::warn!("{}; drawing without it", e);
                None
            }
        }
    }
}
