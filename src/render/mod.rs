//! render
//!
//! Template-rendering seam and the debug-model asset writer.
//!
//! # Architecture
//!
//! The templating engine is an external collaborator: this crate only
//! hands it a data object and receives rendered text back. That contract
//! is the [`Renderer`] trait. The built-in `"placeholder"` provider does
//! plain `{{ key }}` substitution over the embedded viewer templates and
//! is the default; a richer engine slots in behind the same trait.
//!
//! # Provider Selection
//!
//! ```
//! use canistry::render::create_renderer;
//!
//! let renderer = create_renderer("placeholder").unwrap();
//! let data = serde_json::json!({"modelName": "dragon"});
//! let out = renderer.render("loading {{ modelName }}", &data).unwrap();
//! assert_eq!(out, "loading dragon");
//! ```

pub mod debug_model;
pub mod templates;

mod placeholder;

pub use debug_model::{write_debug_assets, DebugAssets, DebugModelData, ModelError};
pub use placeholder::PlaceholderRenderer;

use thiserror::Error;

/// Errors from template rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template references '{0}' which is missing from the data object")]
    MissingField(String),

    #[error("template data must be a JSON object")]
    NotAnObject,

    #[error("unknown renderer provider '{0}'")]
    UnknownProvider(String),
}

/// Rendering collaborator: data object in, rendered text out.
pub trait Renderer {
    /// Render `template` against `data`.
    ///
    /// `data` must be a JSON object; fields the template references must
    /// be present.
    fn render(&self, template: &str, data: &serde_json::Value) -> Result<String, RenderError>;
}

/// Default renderer provider name.
pub const DEFAULT_PROVIDER: &str = "placeholder";

/// Create a renderer by provider name.
///
/// # Providers
///
/// - `"placeholder"` (default): built-in `{{ key }}` substitution
pub fn create_renderer(provider: &str) -> Result<Box<dyn Renderer>, RenderError> {
    match provider {
        "placeholder" => Ok(Box::new(PlaceholderRenderer)),
        other => Err(RenderError::UnknownProvider(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_provider_resolves() {
        assert!(create_renderer(DEFAULT_PROVIDER).is_ok());
    }

    #[test]
    fn unknown_provider_is_rejected() {
        let err = create_renderer("jinja").err().unwrap();
        assert!(matches!(err, RenderError::UnknownProvider(_)));
    }
}
