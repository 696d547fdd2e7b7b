// Central asset management system

use super::{AssetError, AssetHandle, AssetId, AssetLoader, ImageHandle, ImageRef};
use crate::core::Rect;
use anyhow::Result;
use image::{Rgba, RgbaImage};
use log::{debug, warn};
use std::collections::HashMap;
use std::path::Path;

/// Geometry for a generated stand-in sprite sheet
///
/// Each frame is `frame_width x frame_height` and transparent except for a
/// `figure` rectangle (frame coordinates) filled with `color`. The figure is
/// nudged one pixel per frame so animation is still visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaceholderSpec {
    pub frame_width: u32,
    pub frame_height: u32,
    pub frames: u32,
    pub figure: Rect,
    pub color: [u8; 4],
}

/// Central asset manager for the game
///
/// Owns every decoded bitmap. Everything else holds `ImageRef`s.
#[derive(Debug)]
pub struct AssetManager {
    /// Asset loader
    loader: AssetLoader,

    /// Loaded images
    images: HashMap<AssetId, RgbaImage>,

    /// Path to ID mapping for images
    image_paths: HashMap<String, AssetId>,
}

impl AssetManager {
    /// Create a new asset manager
    pub fn new<P: AsRef<Path>>(asset_path: P) -> Self {
        Self {
            loader: AssetLoader::new(asset_path),
            images: HashMap::new(),
            image_paths: HashMap::new(),
        }
    }

    /// Load and decode an image from disk
    pub fn load_image(&mut self, name: &str) -> Result<ImageRef> {
        if let Some(image) = self.cached(name) {
            return Ok(image);
        }

        if !AssetLoader::is_image(name) {
            return Err(AssetError::LoadError(format!("{} is not an image", name)).into());
        }

        let bytes = self.loader.load_bytes(name)?;
        let decoded = image::load_from_memory(&bytes)
            .map_err(|source| AssetError::Decode {
                name: name.to_string(),
                source,
            })?
            .to_rgba8();

        debug!(
            "Loaded image {} ({}x{})",
            name,
            decoded.width(),
            decoded.height()
        );
        self.insert_image(name, decoded)
    }

    /// Register an already decoded bitmap under `name`
    pub fn insert_image(&mut self, name: &str, image: RgbaImage) -> Result<ImageRef> {
        if self.image_paths.contains_key(name) {
            return Err(AssetError::AlreadyLoaded(name.to_string()).into());
        }

        let id = AssetId::from_path(name);
        let image_ref = ImageRef::new(AssetHandle::new(id), image.width(), image.height());
        self.images.insert(id, image);
        self.image_paths.insert(name.to_string(), id);

        Ok(image_ref)
    }

    /// Load `name`, or generate a placeholder sheet when it cannot be loaded
    pub fn load_or_placeholder(&mut self, name: &str, spec: &PlaceholderSpec) -> ImageRef {
        match self.load_image(name) {
            Ok(image) => image,
            Err(e) => {
                warn!("{:#}; using placeholder art", e);
                self.placeholder_sheet(name, spec)
            }
        }
    }

    /// Generate (or fetch the cached) placeholder sheet for `name`
    pub fn placeholder_sheet(&mut self, name: &str, spec: &PlaceholderSpec) -> ImageRef {
        let key = format!("placeholder:{}", name);
        if let Some(image) = self.cached(&key) {
            return image;
        }

        let frames = spec.frames.max(1);
        let mut sheet = RgbaImage::new(spec.frame_width * frames, spec.frame_height.max(1));

        for frame in 0..frames {
            let dx = frame as f32;
            let figure = spec.figure.translated(glam::Vec2::new(dx, 0.0));
            let frame_left = frame * spec.frame_width;

            for y in 0..sheet.height() {
                for x in 0..spec.frame_width {
                    let (fx, fy) = (x as f32, y as f32);
                    if fx >= figure.left()
                        && fx < figure.right()
                        && fy >= figure.top()
                        && fy < figure.bottom()
                    {
                        sheet.put_pixel(frame_left + x, y, Rgba(spec.color));
                    }
                }
            }
        }

        let id = AssetId::from_path(&key);
        let image_ref = ImageRef::new(AssetHandle::new(id), sheet.width(), sheet.height());
        self.images.insert(id, sheet);
        self.image_paths.insert(key, id);
        image_ref
    }

    /// Get a bitmap by handle
    pub fn get_image(&self, handle: ImageHandle) -> Option<&RgbaImage> {
        self.images.get(&handle.id())
    }

    /// Check if an asset exists on disk
    pub fn asset_exists(&self, name: &str) -> bool {
        self.loader.exists(name)
    }

    /// Get statistics about loaded assets
    pub fn stats(&self) -> AssetStats {
        AssetStats {
            image_count: self.images.len(),
            total_pixels: self
                .images
                .values()
                .map(|image| image.width() as u64 * image.height() as u64)
                .sum(),
        }
    }

    fn cached(&self, name: &str) -> Option<ImageRef> {
        let id = *self.image_paths.get(name)?;
        let image = self.images.get(&id)?;
        Some(ImageRef::new(
            AssetHandle::new(id),
            image.width(),
            image.height(),
        ))
    }
}

/// Statistics about loaded assets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetStats {
    pub image_count: usize,
    pub total_pixels: u64,
}
