//! core::material
//!
//! Serializable descriptors for renderable-surface properties, consumed by
//! the template-rendering collaborator.
//!
//! # Encoding
//!
//! Variants are internally tagged with a `type` discriminator. Every
//! variant carries a mandatory `color`; the shading parameters are
//! optional and **omitted from the output when unset** — never serialized
//! as `null`. A consumer must not infer a default shading behavior from a
//! missing field.
//!
//! ```
//! use canistry::core::material::MaterialDescriptor;
//!
//! let basic = MaterialDescriptor::basic("#fff");
//! assert_eq!(
//!     serde_json::to_string(&basic).unwrap(),
//!     r##"{"type":"basic","color":"#fff"}"##
//! );
//! ```

use serde::{Deserialize, Serialize};

/// A renderable-surface descriptor.
///
/// Pure value object: constructed from CLI arguments, serialized once,
/// never mutated. The variant ladder adds shading parameters as the
/// shading model grows richer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MaterialDescriptor {
    /// Unlit flat color.
    Basic {
        color: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        emissive: Option<String>,
    },
    /// Diffuse-only shading.
    Lambert {
        color: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        emissive: Option<String>,
    },
    /// Specular shading with a shininess exponent.
    Phong {
        color: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        emissive: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        specular: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        shininess: Option<f64>,
    },
    /// Physically-based shading, standard parameter set.
    Standard {
        color: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        emissive: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        roughness: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        metalness: Option<f64>,
    },
    /// Physically-based shading with the extended parameter set.
    Pbr {
        color: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        emissive: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        roughness: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        metalness: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        iridescence: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        sheen: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        sheen_roughness: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        sheen_color: Option<String>,
    },
}

impl MaterialDescriptor {
    /// Basic material with only the mandatory color.
    pub fn basic(color: impl Into<String>) -> Self {
        MaterialDescriptor::Basic {
            color: color.into(),
            emissive: None,
        }
    }

    /// Lambert material with only the mandatory color.
    pub fn lambert(color: impl Into<String>) -> Self {
        MaterialDescriptor::Lambert {
            color: color.into(),
            emissive: None,
        }
    }

    /// Canonical JSON encoding (pretty-printed, unset optionals omitted).
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_serializes_only_color_and_tag() {
        let json = serde_json::to_value(MaterialDescriptor::basic("#fff")).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["type"], "basic");
        assert_eq!(obj["color"], "#fff");
    }

    #[test]
    fn unset_optionals_are_omitted_not_null() {
        let phong = MaterialDescriptor::Phong {
            color: "#336699".into(),
            emissive: None,
            specular: Some("#111111".into()),
            shininess: None,
        };
        let json = serde_json::to_value(&phong).unwrap();
        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("specular"));
        assert!(!obj.contains_key("emissive"));
        assert!(!obj.contains_key("shininess"));
    }

    #[test]
    fn pbr_carries_the_extended_set() {
        let pbr = MaterialDescriptor::Pbr {
            color: "#abcdef".into(),
            emissive: None,
            roughness: Some(0.4),
            metalness: Some(1.0),
            iridescence: Some(0.2),
            sheen: Some(0.5),
            sheen_roughness: Some(0.3),
            sheen_color: Some("#ffeecc".into()),
        };
        let json = serde_json::to_value(&pbr).unwrap();
        assert_eq!(json["type"], "pbr");
        assert_eq!(json["sheen_color"], "#ffeecc");
        assert_eq!(json["iridescence"], 0.2);
    }

    #[test]
    fn round_trips_through_json() {
        let standard = MaterialDescriptor::Standard {
            color: "#808080".into(),
            emissive: Some("#000000".into()),
            roughness: Some(0.9),
            metalness: None,
        };
        let json = serde_json::to_string(&standard).unwrap();
        let back: MaterialDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, standard);
    }
}
