//! render::templates
//!
//! Embedded templates for the debug-model viewer assets.
//!
//! Markers use `{{ key }}` placeholder syntax and are filled from a
//! [`super::debug_model::DebugModelData`] object. The viewer is a plain
//! ES-module page: the JS entry point loads the model into a
//! `<model-viewer>` element and the HTML index pulls the entry point in.

/// JS entry-point template. Fields: `model`, `modelName`.
pub const MODEL_VIEWER_JS: &str = r#"// Debug viewer entry point for {{ modelName }}.
const viewer = document.querySelector('model-viewer');

viewer.src = './{{ model }}';
viewer.alt = '{{ modelName }}';

viewer.addEventListener('load', () => {
  console.log('{{ modelName }} loaded');
});

viewer.addEventListener('error', (event) => {
  console.error('failed to load {{ model }}', event);
});
"#;

/// HTML index template. Fields: `modelName`, `jsFileName`.
pub const MODEL_VIEWER_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>{{ modelName }} — debug viewer</title>
    <script
      type="module"
      src="https://unpkg.com/@google/model-viewer/dist/model-viewer.min.js"
    ></script>
  </head>
  <body>
    <model-viewer
      camera-controls
      auto-rotate
      shadow-intensity="1"
      style="width: 100vw; height: 100vh"
    ></model-viewer>
    <script type="module" src="./{{ jsFileName }}"></script>
  </body>
</html>
"#;
