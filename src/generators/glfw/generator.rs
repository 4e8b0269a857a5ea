use crate::generators::base::templates::TemplateRegistry;
use crate::generators::base::BaseBindingsGenerator;
use crate::generators::glfw::templates::GlfwTemplate;
use crate::models::Dialect;
use tera::Tera;

/// Generator for GLFW skeletons, including the header's typedefs
pub struct GlfwBindingsGenerator {
    tera: Tera,
}

impl GlfwBindingsGenerator {
    pub fn new() -> crate::Result<Self> {
        Ok(Self {
            tera: GlfwTemplate::create_tera().map_err(crate::Error::CodeGeneration)?,
        })
    }
}

impl BaseBindingsGenerator for GlfwBindingsGenerator {
    fn tera(&self) -> &Tera {
        &self.tera
    }

    fn dialect(&self) -> Dialect {
        Dialect::Glfw
    }

    fn template_name(&self) -> &'static str {
        "glfw/skeleton.c.tera"
    }
}
