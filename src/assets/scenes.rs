use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;

use crate::assets::decode::decode_image;
use crate::foundation::error::{MockupError, MockupResult};
use crate::product::descriptor::{ProductCode, SceneKey};
use crate::raster::mask::AlphaMask;
use crate::raster::surface::Surface;

/// File name of the catalog manifest inside a scene directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Stock-photo template a photo is composited into.
///
/// The mask's alpha selects where the photo shows; the optional shadow is laid over the
/// background before the photo is blended in.
#[derive(Clone, Debug)]
pub struct SceneAsset {
    key: SceneKey,
    background: Surface,
    mask: AlphaMask,
    shadow: Option<Surface>,
    insert_width_px: u32,
}

impl SceneAsset {
    /// Assemble a template; mask and shadow must match the background size.
    pub fn new(
        key: SceneKey,
        background: Surface,
        mask: &Surface,
        shadow: Option<Surface>,
        insert_width_px: u32,
    ) -> MockupResult<Self> {
        if insert_width_px == 0 {
            return Err(MockupError::asset(format!(
                "scene {key}: insert width must be > 0"
            )));
        }
        let expected = background.size();
        let layers = std::iter::once(("mask", mask.size()))
            .chain(shadow.as_ref().map(|s| ("shadow", s.size())));
        for (what, size) in layers {
            if size != expected {
                return Err(MockupError::asset(format!(
                    "scene {key}: {what} is {}x{}, background is {}x{}",
                    size.width, size.height, expected.width, expected.height
                )));
            }
        }
        Ok(Self {
            key,
            background,
            mask: AlphaMask::from_surface_alpha(mask),
            shadow,
            insert_width_px,
        })
    }

    /// Catalog key.
    pub fn key(&self) -> &SceneKey {
        &self.key
    }

    /// Scene photograph.
    pub fn background(&self) -> &Surface {
        &self.background
    }

    /// Insert region coverage.
    pub fn mask(&self) -> &AlphaMask {
        &self.mask
    }

    /// Shadow overlay, if the scene has one.
    pub fn shadow(&self) -> Option<&Surface> {
        self.shadow.as_ref()
    }

    /// Width the photo is resized to before it is centered in the scene.
    pub fn insert_width_px(&self) -> u32 {
        self.insert_width_px
    }
}

#[derive(Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct Manifest {
    scenes: Vec<ManifestEntry>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestEntry {
    product: ProductCode,
    name: String,
    background: String,
    mask: String,
    #[serde(default)]
    shadow: Option<String>,
    insert_width_px: u32,
}

/// Read-only set of scene templates, loaded once and shared between renders.
#[derive(Clone, Debug, Default)]
pub struct SceneCatalog {
    scenes: HashMap<SceneKey, Arc<SceneAsset>>,
}

impl SceneCatalog {
    /// Empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Templates shipped in this crate's `scenes/` directory.
    pub fn bundled() -> MockupResult<Self> {
        Self::load(Self::bundled_dir())
    }

    /// Location of the shipped templates.
    pub fn bundled_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("scenes")
    }

    /// Read `dir/manifest.json` and decode every template it lists.
    pub fn load(dir: impl AsRef<Path>) -> MockupResult<Self> {
        let dir = dir.as_ref();
        let manifest_path = dir.join(MANIFEST_FILE);
        let bytes = read_asset(&manifest_path)?;
        let manifest: Manifest = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse scene manifest '{}'", manifest_path.display()))
            .map_err(asset_error)?;

        let mut catalog = Self::new();
        for entry in manifest.scenes {
            let key = SceneKey::new(entry.product, entry.name);
            if catalog.scenes.contains_key(&key) {
                return Err(MockupError::asset(format!(
                    "scene {key} listed twice in '{}'",
                    manifest_path.display()
                )));
            }
            let background = load_image(dir, &entry.background)?;
            let mask = load_image(dir, &entry.mask)?;
            let shadow = entry
                .shadow
                .as_deref()
                .map(|rel| load_image(dir, rel))
                .transpose()?;
            let asset = SceneAsset::new(key, background, &mask, shadow, entry.insert_width_px)?;
            tracing::debug!(scene = %asset.key, "loaded scene template");
            catalog.insert(asset);
        }
        Ok(catalog)
    }

    /// Add or replace a template.
    pub fn insert(&mut self, asset: SceneAsset) {
        self.scenes.insert(asset.key.clone(), Arc::new(asset));
    }

    /// Template for `key`; unknown keys are an input error.
    pub fn get(&self, key: &SceneKey) -> MockupResult<Arc<SceneAsset>> {
        self.scenes
            .get(key)
            .cloned()
            .ok_or_else(|| MockupError::unknown_scene(key.to_string()))
    }

    /// Number of templates.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// `true` if no templates are loaded.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Keys of every loaded template, sorted.
    pub fn keys(&self) -> Vec<SceneKey> {
        let mut keys: Vec<_> = self.scenes.keys().cloned().collect();
        keys.sort_by(|a, b| (a.product.code(), &a.name).cmp(&(b.product.code(), &b.name)));
        keys
    }
}

fn asset_error(e: anyhow::Error) -> MockupError {
    MockupError::asset(format!("{e:#}"))
}

fn read_asset(path: &Path) -> MockupResult<Vec<u8>> {
    std::fs::read(path)
        .with_context(|| format!("read scene asset '{}'", path.display()))
        .map_err(asset_error)
}

fn load_image(dir: &Path, rel: &str) -> MockupResult<Surface> {
    let path = dir.join(normalize_rel_path(rel)?);
    let bytes = read_asset(&path)?;
    decode_image(&bytes).map_err(|e| {
        MockupError::asset(format!("decode scene asset '{}': {e}", path.display()))
    })
}

/// Normalize a manifest path: forward slashes, no `.` segments, relative and inside the scene
/// directory.
pub fn normalize_rel_path(source: &str) -> MockupResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(MockupError::asset(format!(
            "scene asset path '{source}' must be relative"
        )));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(MockupError::asset(format!(
                "scene asset path '{source}' must not contain '..'"
            )));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(MockupError::asset("scene asset path must contain a file name"));
    }
    Ok(out.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/scenes.rs"]
mod tests;
