use crate::{generators::base::templates::TemplateRegistry, template};
use tera::Tera;

pub struct GlfwTemplate;

impl TemplateRegistry for GlfwTemplate {
    /// Register the GLFW skeleton template from an embedded string
    fn register_templates(tera: &mut Tera) -> Result<(), String> {
        template!(tera, "glfw/skeleton.c.tera", "templates/skeleton.c.tera");
        Ok(())
    }
}
