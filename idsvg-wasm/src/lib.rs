//! Browser bindings: render IDS strings with a font handed over as bytes.

use idsvg_core::{IdsError, IdsResult};
use idsvg_fonts::{FontData, FontError};
use idsvg_svg::{RenderOptions, Renderer};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct RenderOutput {
    svg: String,
    diagnostics: String,
    has_error: bool,
}

#[wasm_bindgen]
impl RenderOutput {
    #[wasm_bindgen(getter)]
    pub fn svg(&self) -> String {
        self.svg.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn diagnostics(&self) -> String {
        self.diagnostics.clone()
    }

    #[wasm_bindgen(getter, js_name = hasError)]
    pub fn has_error(&self) -> bool {
        self.has_error
    }
}

impl From<IdsResult<String>> for RenderOutput {
    fn from(result: IdsResult<String>) -> Self {
        match result {
            Ok(svg) => Self {
                svg,
                diagnostics: String::new(),
                has_error: false,
            },
            Err(err) => Self {
                svg: String::new(),
                diagnostics: format_diagnostic(&err),
                has_error: true,
            },
        }
    }
}

/// A loaded font plus render options.
#[wasm_bindgen]
pub struct IdsToSvg {
    font: FontData,
    options: RenderOptions,
}

#[wasm_bindgen]
impl IdsToSvg {
    /// Parse `font_bytes`; throws if they are not an OpenType/TrueType font.
    #[wasm_bindgen(constructor)]
    pub fn new(
        font_bytes: Vec<u8>,
        font_size: Option<f64>,
        color: Option<String>,
    ) -> Result<Self, JsValue> {
        Self::create(font_bytes, font_size, color).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = svgFromIds)]
    pub fn svg_from_ids(&self, ids: &str) -> RenderOutput {
        Renderer::new(&self.font, self.options.clone())
            .render_to_string(ids)
            .into()
    }
}

impl IdsToSvg {
    fn create(
        font_bytes: Vec<u8>,
        font_size: Option<f64>,
        color: Option<String>,
    ) -> Result<Self, FontError> {
        let defaults = RenderOptions::default();
        Ok(Self {
            font: FontData::from_vec(font_bytes)?,
            options: RenderOptions {
                font_size: font_size.unwrap_or(defaults.font_size),
                color: color.unwrap_or(defaults.color),
                max_depth: defaults.max_depth,
            },
        })
    }
}

fn format_diagnostic(err: &IdsError) -> String {
    match err {
        IdsError::MalformedSequence { position, .. } => format!("error [{position}] {err}"),
        _ => format!("error {err}"),
    }
}
