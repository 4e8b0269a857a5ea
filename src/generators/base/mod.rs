pub mod file_writer;
pub mod template_context;
pub mod templates;

use crate::interface::config::GenerateConfig;
use crate::models::{Dialect, HeaderModel};
use file_writer::FileWriter;
use std::path::{Path, PathBuf};
use template_context::{ConstantContext, FunctionContext, TypeAliasContext};
use templates::GlobalContext;
use tera::{Context, Tera};

/// Common trait for all skeleton generators
pub trait BaseBindingsGenerator {
    /// Template engine with this generator's templates registered
    fn tera(&self) -> &Tera;

    /// Header dialect the templates are written for
    fn dialect(&self) -> Dialect;

    /// Name of the main skeleton template
    fn template_name(&self) -> &'static str;

    /// Render the skeleton source for a model without touching the filesystem
    fn render_skeleton(
        &self,
        model: &HeaderModel,
        output_name: &str,
        config: &GenerateConfig,
    ) -> crate::Result<String> {
        if model.dialect != self.dialect() {
            return Err(crate::Error::CodeGeneration(format!(
                "{} model cannot be rendered by the {} generator",
                model.dialect,
                self.dialect()
            )));
        }

        let global = GlobalContext::new(&model.source_name, output_name)
            .with_banner(config.banner.as_deref());
        let includes = config.effective_includes();
        let context = create_skeleton_context(model, &global, &includes);

        templates::render(self.tera(), self.template_name(), &context)
            .map_err(crate::Error::CodeGeneration)
    }

    /// Render the skeleton and write it to the configured output path
    fn generate_skeleton(
        &self,
        model: &HeaderModel,
        config: &GenerateConfig,
    ) -> crate::Result<PathBuf> {
        let output_path = Path::new(config.output_path());
        let output_name = output_path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .ok_or_else(|| {
                crate::Error::CodeGeneration(format!(
                    "Output path has no file name: {}",
                    config.output_path()
                ))
            })?;

        // render fully before the output file is opened
        let content = self.render_skeleton(model, &output_name, config)?;

        let file_writer = FileWriter::for_output_file(output_path)?;
        file_writer.write_generated_file(&output_name, &content)
    }
}

/// Build the template context shared by all skeleton templates
pub fn create_skeleton_context(
    model: &HeaderModel,
    global: &GlobalContext,
    includes: &[String],
) -> Context {
    let functions: Vec<FunctionContext> = model
        .functions
        .iter()
        .map(FunctionContext::from_function_decl)
        .collect();
    let constants: Vec<ConstantContext> = model
        .constants
        .iter()
        .map(ConstantContext::from_constant_decl)
        .collect();
    let type_aliases: Vec<TypeAliasContext> = model
        .type_aliases
        .iter()
        .map(TypeAliasContext::from_type_alias_decl)
        .collect();

    let mut context = Context::new();
    context.insert("global", global);
    context.insert("includes", includes);
    context.insert("module_opener", &model.dialect.module_opener());
    context.insert("functions", &functions);
    context.insert("constants", &constants);
    context.insert("type_aliases", &type_aliases);
    context
}
