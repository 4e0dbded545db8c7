//! render::placeholder
//!
//! Built-in `{{ key }}` substitution renderer.

use serde_json::Value;

use super::{RenderError, Renderer};

/// Substitutes `{{ key }}` markers from a flat JSON object. Whitespace
/// inside the braces is tolerated. A marker naming a field absent from
/// the data object is an error rather than silently rendering the marker
/// through to the output.
pub struct PlaceholderRenderer;

impl Renderer for PlaceholderRenderer {
    fn render(&self, template: &str, data: &Value) -> Result<String, RenderError> {
        let object = data.as_object().ok_or(RenderError::NotAnObject)?;

        let mut out = String::with_capacity(template.len());
        let mut rest = template;
        while let Some(start) = rest.find("{{") {
            let (before, after_open) = rest.split_at(start);
            out.push_str(before);
            let after_open = &after_open[2..];
            let end = after_open
                .find("}}")
                .ok_or_else(|| RenderError::MissingField(after_open.trim().to_string()))?;
            let key = after_open[..end].trim();
            let value = object
                .get(key)
                .ok_or_else(|| RenderError::MissingField(key.to_string()))?;
            match value {
                Value::String(s) => out.push_str(s),
                other => out.push_str(&other.to_string()),
            }
            rest = &after_open[end + 2..];
        }
        out.push_str(rest);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn substitutes_string_fields() {
        let out = PlaceholderRenderer
            .render("import './{{ model }}';", &json!({"model": "dragon.glb"}))
            .unwrap();
        assert_eq!(out, "import './dragon.glb';");
    }

    #[test]
    fn tolerates_tight_braces() {
        let out = PlaceholderRenderer
            .render("{{model}}", &json!({"model": "x.glb"}))
            .unwrap();
        assert_eq!(out, "x.glb");
    }

    #[test]
    fn missing_field_is_an_error() {
        let err = PlaceholderRenderer
            .render("{{ absent }}", &json!({"model": "x"}))
            .unwrap_err();
        assert!(matches!(err, RenderError::MissingField(f) if f == "absent"));
    }

    #[test]
    fn non_object_data_is_rejected() {
        let err = PlaceholderRenderer.render("{{ a }}", &json!(42)).unwrap_err();
        assert!(matches!(err, RenderError::NotAnObject));
    }

    #[test]
    fn template_without_markers_passes_through() {
        let out = PlaceholderRenderer.render("plain text", &json!({})).unwrap();
        assert_eq!(out, "plain text");
    }

    #[test]
    fn repeated_markers_substitute_each_time() {
        let out = PlaceholderRenderer
            .render("{{ a }}-{{ a }}", &json!({"a": "x"}))
            .unwrap();
        assert_eq!(out, "x-x");
    }
}
