// Asset management system
//
// Loads and caches decoded bitmaps. Sprites only ever hold an `ImageRef`
// (handle plus dimensions); the pixels stay owned by the `AssetManager`.

mod handle;
mod loader;
mod manager;

pub use handle::{AssetHandle, AssetId, ImageAsset, ImageHandle, ImageRef};
pub use loader::AssetLoader;
pub use manager::{AssetManager, AssetStats, PlaceholderSpec};

/// Asset loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Asset already loaded: {0}")]
    AlreadyLoaded(String),

    #[error("Failed to load asset: {0}")]
    LoadError(String),

    #[error("Failed to decode image {name}: {source}")]
    Decode {
        name: String,
        #[source]
        source: image::ImageError,
    },
}
