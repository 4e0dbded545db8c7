//! material-data / widget-data commands - descriptor JSON to stdout
//!
//! The JSON goes to stdout unconditionally (it is the command's product,
//! not chatter), so the descriptors compose with shell pipelines even
//! under --quiet.

use anyhow::{Context as _, Result};

use crate::cli::args::{MaterialAction, WidgetAction};
use crate::cli::Context;
use crate::core::material::MaterialDescriptor;
use crate::core::widget::{MeshRef, WidgetDescriptor};

/// Build a material descriptor from CLI arguments and print its JSON.
pub fn material_data(_ctx: &Context, action: MaterialAction) -> Result<()> {
    let descriptor = match action {
        MaterialAction::Basic { color, emissive } => {
            MaterialDescriptor::Basic { color, emissive }
        }
        MaterialAction::Lambert { color, emissive } => {
            MaterialDescriptor::Lambert { color, emissive }
        }
        MaterialAction::Phong {
            color,
            emissive,
            specular,
            shininess,
        } => MaterialDescriptor::Phong {
            color,
            emissive,
            specular,
            shininess,
        },
        MaterialAction::Standard {
            color,
            emissive,
            roughness,
            metalness,
        } => MaterialDescriptor::Standard {
            color,
            emissive,
            roughness,
            metalness,
        },
        MaterialAction::Pbr {
            color,
            emissive,
            roughness,
            metalness,
            iridescence,
            sheen,
            sheen_roughness,
            sheen_color,
        } => MaterialDescriptor::Pbr {
            color,
            emissive,
            roughness,
            metalness,
            iridescence,
            sheen,
            sheen_roughness,
            sheen_color,
        },
    };

    println!("{}", descriptor.to_json().context("Failed to encode material")?);
    Ok(())
}

/// Build a widget descriptor from CLI arguments and print its JSON.
pub fn widget_data(_ctx: &Context, action: WidgetAction) -> Result<()> {
    let descriptor = match action {
        WidgetAction::IntSlider {
            hidden,
            default,
            min,
            max,
            slider_type,
            action_type,
        } => WidgetDescriptor::IntSlider {
            show: !hidden,
            default,
            min,
            max,
            slider_type,
            action_type,
        },
        WidgetAction::FloatSlider {
            hidden,
            default,
            min,
            max,
            slider_type,
            action_type,
        } => WidgetDescriptor::FloatSlider {
            show: !hidden,
            default,
            min,
            max,
            slider_type,
            action_type,
        },
        WidgetAction::MeshToggle {
            hidden,
            name,
            visible,
        } => WidgetDescriptor::MeshToggle {
            show: !hidden,
            name,
            visible,
        },
        WidgetAction::MeshSet {
            hidden,
            meshes,
            selected,
        } => {
            let set: Vec<MeshRef> = meshes.iter().map(|entry| parse_mesh_entry(entry)).collect();
            WidgetDescriptor::mesh_set(!hidden, set, selected)
                .context("Invalid mesh set arguments")?
        }
    };

    println!("{}", descriptor.to_json().context("Failed to encode widget")?);
    Ok(())
}

/// Parse a `name[:hidden]` mesh entry. Entries are visible unless the
/// `:hidden` suffix is present.
fn parse_mesh_entry(entry: &str) -> MeshRef {
    match entry.strip_suffix(":hidden") {
        Some(name) => MeshRef {
            name: name.to_string(),
            visible: false,
        },
        None => MeshRef {
            name: entry.to_string(),
            visible: true,
        },
    }
}
