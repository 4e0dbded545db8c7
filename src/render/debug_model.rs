//! render::debug_model
//!
//! Writes the debug viewer assets for a model file in the assets-source
//! tree.
//!
//! # Flow
//!
//! 1. Validate the named model file exists under the assets-source
//!    directory and is a GLTF binary (`.glb`).
//! 2. Derive the logical model name by stripping the extension.
//! 3. Build a [`DebugModelData`] record and render the JS entry-point
//!    template and the HTML index template through the [`Renderer`] seam.
//! 4. Write the rendered results to fixed filenames (`index.js`,
//!    `index.html`) beside the model.
//!
//! A missing model aborts before anything is rendered or written; a
//! viewer page referencing a nonexistent model is never produced.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use super::templates::{MODEL_VIEWER_HTML, MODEL_VIEWER_JS};
use super::{RenderError, Renderer};

/// Fixed output name for the rendered JS entry point.
pub const JS_FILE_NAME: &str = "index.js";

/// Fixed output name for the rendered HTML index.
pub const HTML_FILE_NAME: &str = "index.html";

/// Errors from the debug-model flow.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model file '{0}' not found in the assets source directory")]
    ModelNotFound(PathBuf),

    #[error("'{0}' is not a GLTF binary; only .glb model files are accepted")]
    UnsupportedFormat(PathBuf),

    #[error("failed to write '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Template input for the debug viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugModelData {
    /// Model file name as it sits on disk (`dragon.glb`).
    pub model: String,
    /// Logical name with the extension stripped (`dragon`).
    pub model_name: String,
    /// Name the HTML index uses to import the JS entry point.
    pub js_file_name: String,
}

impl DebugModelData {
    /// Build template data for a model file name.
    pub fn for_model(model: &str) -> Self {
        let model_name = Path::new(model)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| model.to_string());
        Self {
            model: model.to_string(),
            model_name,
            js_file_name: JS_FILE_NAME.to_string(),
        }
    }
}

/// Paths of the written viewer assets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugAssets {
    pub js_path: PathBuf,
    pub html_path: PathBuf,
}

/// Render and write the debug viewer assets for `model_file` under
/// `assets_src`.
///
/// # Errors
///
/// - `ModelNotFound` if the model file is absent (nothing is written)
/// - `UnsupportedFormat` if the file is not `.glb`
pub fn write_debug_assets(
    assets_src: &Path,
    model_file: &str,
    renderer: &dyn Renderer,
) -> Result<DebugAssets, ModelError> {
    let model_path = assets_src.join(model_file);
    if !model_path.is_file() {
        return Err(ModelError::ModelNotFound(model_path));
    }
    if !model_file.to_lowercase().ends_with(".glb") {
        return Err(ModelError::UnsupportedFormat(model_path));
    }

    let data = DebugModelData::for_model(model_file);
    let data_value = serde_json::to_value(&data).expect("template data serializes");

    let js = renderer.render(MODEL_VIEWER_JS, &data_value)?;
    let html = renderer.render(MODEL_VIEWER_HTML, &data_value)?;

    let js_path = assets_src.join(JS_FILE_NAME);
    let html_path = assets_src.join(HTML_FILE_NAME);
    write_file(&js_path, &js)?;
    write_file(&html_path, &html)?;

    Ok(DebugAssets { js_path, html_path })
}

fn write_file(path: &Path, contents: &str) -> Result<(), ModelError> {
    fs::write(path, contents).map_err(|e| ModelError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::PlaceholderRenderer;
    use tempfile::TempDir;

    fn assets_with_model(model: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(model), b"glTF-binary-bytes").unwrap();
        dir
    }

    #[test]
    fn derives_model_name_by_stripping_extension() {
        let data = DebugModelData::for_model("dragon.glb");
        assert_eq!(data.model, "dragon.glb");
        assert_eq!(data.model_name, "dragon");
        assert_eq!(data.js_file_name, "index.js");
    }

    #[test]
    fn writes_both_viewer_assets() {
        let dir = assets_with_model("dragon.glb");
        let assets =
            write_debug_assets(dir.path(), "dragon.glb", &PlaceholderRenderer).unwrap();

        let js = fs::read_to_string(&assets.js_path).unwrap();
        assert!(js.contains("viewer.src = './dragon.glb';"));
        assert!(js.contains("dragon loaded"));

        let html = fs::read_to_string(&assets.html_path).unwrap();
        assert!(html.contains("<title>dragon"));
        assert!(html.contains(r#"src="./index.js""#));
    }

    #[test]
    fn missing_model_aborts_and_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let err =
            write_debug_assets(dir.path(), "phantom.glb", &PlaceholderRenderer).unwrap_err();
        assert!(matches!(err, ModelError::ModelNotFound(_)));
        assert!(!dir.path().join(JS_FILE_NAME).exists());
        assert!(!dir.path().join(HTML_FILE_NAME).exists());
    }

    #[test]
    fn non_glb_model_is_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("scene.gltf"), b"{}").unwrap();
        let err = write_debug_assets(dir.path(), "scene.gltf", &PlaceholderRenderer).unwrap_err();
        assert!(matches!(err, ModelError::UnsupportedFormat(_)));
    }

    #[test]
    fn rerun_overwrites_previous_assets() {
        let dir = assets_with_model("dragon.glb");
        write_debug_assets(dir.path(), "dragon.glb", &PlaceholderRenderer).unwrap();

        fs::write(dir.path().join("wyvern.glb"), b"glb").unwrap();
        let assets = write_debug_assets(dir.path(), "wyvern.glb", &PlaceholderRenderer).unwrap();
        let js = fs::read_to_string(&assets.js_path).unwrap();
        assert!(js.contains("wyvern.glb"));
        assert!(!js.contains("dragon.glb"));
    }
}
