use crate::{generators::base::templates::TemplateRegistry, template};
use tera::Tera;

pub struct GlTemplate;

impl TemplateRegistry for GlTemplate {
    /// Register the OpenGL skeleton template from an embedded string
    fn register_templates(tera: &mut Tera) -> Result<(), String> {
        template!(tera, "gl/skeleton.c.tera", "templates/skeleton.c.tera");
        Ok(())
    }
}
