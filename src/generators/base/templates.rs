use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tera::{Context, Tera, Value};

/// Global context available to all templates.
///
/// Holds no timestamp, regenerated output is byte-identical.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalContext {
    pub version: String,
    pub generator_name: String,
    /// File name of the parsed header
    pub source_name: String,
    /// File name of the generated skeleton
    pub output_name: String,
    /// Optional replacement for the default banner comment lines
    pub banner: Option<Vec<String>>,
}

impl GlobalContext {
    pub fn new(source_name: &str, output_name: &str) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generator_name: env!("CARGO_PKG_NAME").to_string(),
            source_name: source_name.to_string(),
            output_name: output_name.to_string(),
            banner: None,
        }
    }

    pub fn with_banner(mut self, banner: Option<&str>) -> Self {
        self.banner = banner.map(|text| text.lines().map(str::to_string).collect());
        self
    }
}

/// Registration hooks for a generator's embedded templates and filters.
pub trait TemplateRegistry {
    /// Register generator-specific templates from embedded strings
    fn register_templates(tera: &mut Tera) -> Result<(), String>;

    /// Register generator-specific filters
    fn register_filters(_tera: &mut Tera) {}

    /// Create a template engine with the common and generator templates
    fn create_tera() -> Result<Tera, String> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);

        register_common_templates(&mut tera)?;
        Self::register_templates(&mut tera)?;

        register_common_filters(&mut tera);
        Self::register_filters(&mut tera);

        Ok(tera)
    }
}

/// Register common templates used across all generators
pub fn register_common_templates(tera: &mut Tera) -> Result<(), String> {
    tera.add_raw_template("common/header.tera", include_str!("templates/header.tera"))
        .map_err(|e| format!("Failed to register common/header.tera: {}", e))?;

    Ok(())
}

/// Register the column and comment filters
pub fn register_common_filters(tera: &mut Tera) {
    tera.register_filter("ljust", ljust_filter);
    tera.register_filter("c_comment", c_comment_filter);
}

/// Render a template with the given context
pub fn render(tera: &Tera, template_name: &str, context: &Context) -> Result<String, String> {
    tera.render(template_name, context).map_err(|e| {
        let mut error_msg = format!("Failed to render template '{}': {}", template_name, e);

        if let Some(source) = std::error::Error::source(&e) {
            error_msg.push_str(&format!("\nSource: {}", source));
        }

        error_msg
    })
}

// === Common Filters ===

/// `{{ value | ljust(width=30) }}` left-justifies a string in a column.
fn ljust_filter(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let text = match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    let width = args
        .get("width")
        .and_then(Value::as_u64)
        .ok_or_else(|| tera::Error::msg("ljust filter expects a numeric `width` argument"))?;
    Ok(Value::String(ljust(&text, width as usize)))
}

fn c_comment_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    if let Some(s) = value.as_str() {
        Ok(Value::String(escape_for_c_comment(s)))
    } else {
        Err("c_comment filter expects a string".into())
    }
}

/// Pad `text` with spaces up to `width` characters; longer text is kept whole.
pub fn ljust(text: &str, width: usize) -> String {
    format!("{:<width$}", text, width = width)
}

/// Break comment terminators so native text can sit inside `/* ... */`
pub fn escape_for_c_comment(s: &str) -> String {
    s.replace("*/", "* /")
}
