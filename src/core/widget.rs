//! core::widget
//!
//! Serializable descriptors for viewer UI controls, consumed by the
//! template-rendering collaborator alongside the material descriptors.
//!
//! # Encoding
//!
//! Variants are tagged by `widget_type`. Every widget carries a `show`
//! visibility flag; numeric sliders additionally carry their value range
//! and the slider/action sub-type enums. Mesh sets validate their
//! `selected_index` at construction so an out-of-range selection cannot
//! be represented.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from widget construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WidgetError {
    #[error("selected index {index} out of range for mesh set of length {len}")]
    SelectedIndexOutOfRange { index: usize, len: usize },
}

/// Presentation sub-type for numeric sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SliderType {
    /// Free-ranging value slider.
    Value,
    /// Read-only meter display.
    Meter,
}

/// What a slider drives when the user moves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SliderAction {
    /// No bound action; the value is read by scripts.
    None,
    /// Drives a morph-target weight on the model.
    Morph,
    /// Scrubs an animation track.
    Anim,
}

/// One mesh entry inside a [`WidgetDescriptor::MeshSet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeshRef {
    pub name: String,
    pub visible: bool,
}

/// A viewer UI control descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "widget_type", rename_all = "snake_case")]
pub enum WidgetDescriptor {
    /// Integer-ranged slider.
    IntSlider {
        show: bool,
        default: i64,
        min: i64,
        max: i64,
        slider_type: SliderType,
        action_type: SliderAction,
    },
    /// Float-ranged slider.
    FloatSlider {
        show: bool,
        default: f64,
        min: f64,
        max: f64,
        slider_type: SliderType,
        action_type: SliderAction,
    },
    /// Visibility toggle for a single mesh.
    MeshToggle {
        show: bool,
        name: String,
        visible: bool,
    },
    /// Exclusive selection over an ordered set of meshes.
    MeshSet {
        show: bool,
        set: Vec<MeshRef>,
        selected_index: usize,
    },
}

impl WidgetDescriptor {
    /// Build a mesh set, enforcing `0 <= selected_index < set.len()` for
    /// non-empty sets. An empty set pins the index to 0.
    pub fn mesh_set(
        show: bool,
        set: Vec<MeshRef>,
        selected_index: usize,
    ) -> Result<Self, WidgetError> {
        if !set.is_empty() && selected_index >= set.len() {
            return Err(WidgetError::SelectedIndexOutOfRange {
                index: selected_index,
                len: set.len(),
            });
        }
        Ok(WidgetDescriptor::MeshSet {
            show,
            set,
            selected_index,
        })
    }

    /// Canonical JSON encoding (pretty-printed).
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
