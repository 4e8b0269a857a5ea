pub mod cli;
pub mod config;
pub mod output;

use crate::analysis::HeaderAnalyzer;
use crate::generators::create_generator;
use crate::models::{Dialect, HeaderModel, ScanStats};
use serde::Serialize;
use std::path::PathBuf;

pub use cli::*;
pub use config::*;
pub use output::*;

/// Counts reported after a successful generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationSummary {
    pub dialect: Dialect,
    pub output_path: PathBuf,
    pub function_count: usize,
    pub constant_count: usize,
    pub type_alias_count: usize,
    pub stats: ScanStats,
    pub warnings: Vec<String>,
}

impl GenerationSummary {
    pub fn from_model(model: &HeaderModel, output_path: PathBuf) -> Self {
        Self {
            dialect: model.dialect,
            output_path,
            function_count: model.functions.len(),
            constant_count: model.constants.len(),
            type_alias_count: model.type_aliases.len(),
            stats: model.stats.clone(),
            warnings: model.warnings.clone(),
        }
    }
}

/// Read the configured header into a model. Nothing is written.
pub fn extract(config: &GenerateConfig) -> crate::Result<HeaderModel> {
    let analyzer = HeaderAnalyzer::new(config.dialect(), config.build_options())?;
    analyzer.analyze_file(config.header_path())
}

/// Write the skeleton for a model to the configured output path.
pub fn emit(model: &HeaderModel, config: &GenerateConfig) -> crate::Result<PathBuf> {
    let generator = create_generator(model.dialect)?;
    generator.generate_skeleton(model, config)
}

/// Model warnings plus a hint when nothing matched at all
pub fn model_diagnostics(model: &HeaderModel, header_path: &str) -> Vec<String> {
    let mut diagnostics = model.warnings.clone();
    if model.is_empty() {
        diagnostics.push(format!(
            "No declarations matched in {}. Is the dialect right?",
            header_path
        ));
    }
    diagnostics
}

/// Log the diagnostics of an extracted model, and in verbose mode the
/// declarations it holds.
pub fn report_model(model: &HeaderModel, config: &GenerateConfig, logger: &Logger) {
    for diagnostic in model_diagnostics(model, config.header_path()) {
        logger.warning(&diagnostic);
    }

    if config.is_verbose() {
        for alias in &model.type_aliases {
            logger.verbose(&format!("  typedef {}", alias.declared_name()));
        }
        for function in &model.functions {
            logger.verbose(&format!(
                "  {} -> {} ({} args)",
                function.native_name,
                function.exposed_name,
                function.arg_count()
            ));
        }
    }
}

/// Run both phases for one configuration. The output file is only opened
/// once the header has been read completely.
pub fn generate_from_config(config: &GenerateConfig) -> crate::Result<GenerationSummary> {
    config.validate()?;
    let logger = Logger::new(config.is_verbose(), false);

    logger.verbose(&format!(
        "Scanning {} header: {}",
        config.dialect(),
        config.header_path()
    ));

    let model = extract(config)?;
    report_model(&model, config, &logger);

    let output_path = emit(&model, config)?;
    logger.verbose(&format!("Wrote {}", output_path.display()));

    Ok(GenerationSummary::from_model(&model, output_path))
}
