pub mod base;
pub mod gl;
pub mod glfw;

use crate::models::Dialect;

pub use base::templates::GlobalContext;
pub use base::BaseBindingsGenerator as BindingsGenerator;
pub use gl::generator::GlBindingsGenerator;
pub use glfw::generator::GlfwBindingsGenerator;

/// Macro to reduce boilerplate for template registration
#[macro_export]
macro_rules! template {
    ($tera:expr, $name:expr, $path:expr) => {
        $tera
            .add_raw_template($name, include_str!($path))
            .map_err(|e| format!("Failed to register {}: {}", $name, e))?;
    };
}

/// Factory function to create the skeleton generator for a dialect
pub fn create_generator(dialect: Dialect) -> crate::Result<Box<dyn BindingsGenerator>> {
    Ok(match dialect {
        Dialect::Gl => Box::new(GlBindingsGenerator::new()?),
        Dialect::Glfw => Box::new(GlfwBindingsGenerator::new()?),
    })
}
