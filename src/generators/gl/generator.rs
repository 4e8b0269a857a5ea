use crate::generators::base::templates::TemplateRegistry;
use crate::generators::base::BaseBindingsGenerator;
use crate::generators::gl::templates::GlTemplate;
use crate::models::Dialect;
use tera::Tera;

/// Generator for OpenGL skeletons.
///
/// Table entries are emitted commented out so each binding can be enabled
/// once its stub has a real body.
pub struct GlBindingsGenerator {
    tera: Tera,
}

impl GlBindingsGenerator {
    pub fn new() -> crate::Result<Self> {
        Ok(Self {
            tera: GlTemplate::create_tera().map_err(crate::Error::CodeGeneration)?,
        })
    }
}

impl BaseBindingsGenerator for GlBindingsGenerator {
    fn tera(&self) -> &Tera {
        &self.tera
    }

    fn dialect(&self) -> Dialect {
        Dialect::Gl
    }

    fn template_name(&self) -> &'static str {
        "gl/skeleton.c.tera"
    }
}
