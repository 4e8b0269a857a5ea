use crate::analysis::model_builder::BuildOptions;
use crate::models::Dialect;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid dialect: {0}. Use 'gl' or 'glfw'")]
    InvalidDialect(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Settings of one skeleton generation run.
///
/// Unset values fall back to the defaults of the configured dialect, so a
/// configuration file only needs to name what it changes.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct GenerateConfig {
    /// Header dialect ('gl' or 'glfw'), defaults to 'gl'
    #[serde(default)]
    pub dialect: Option<Dialect>,

    /// Path of the C header to scan
    #[serde(default)]
    pub header_path: Option<String>,

    /// Path of the generated skeleton file
    #[serde(default)]
    pub output_path: Option<String>,

    /// Prefix of generated stub symbols
    #[serde(default)]
    pub stub_prefix: Option<String>,

    /// Sort emitted tables by exposed name
    #[serde(default)]
    pub sort: Option<bool>,

    /// Keep only the first typedef of each declared name
    #[serde(default)]
    pub dedup_type_aliases: Option<bool>,

    /// Native function names left out of the skeleton
    #[serde(default)]
    pub ignored_functions: Vec<String>,

    /// Native macro names left out of the constant table
    #[serde(default)]
    pub ignored_constants: Vec<String>,

    /// Typedef names left out of the skeleton
    #[serde(default)]
    pub ignored_type_aliases: Vec<String>,

    /// Headers included by the skeleton
    #[serde(default)]
    pub includes: Option<Vec<String>>,

    /// Replacement text for the generated header comment
    #[serde(default)]
    pub banner: Option<String>,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: Option<bool>,
}

/// Parse a dialect name given on the command line or in a config file.
pub fn parse_dialect(value: &str) -> Result<Dialect, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::InvalidDialect(value.to_string()))
}

impl GenerateConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration for `dialect` with every default spelled out
    pub fn for_dialect(dialect: Dialect) -> Self {
        Self {
            dialect: Some(dialect),
            header_path: Some(dialect.default_header_path().to_string()),
            output_path: Some(dialect.default_output_path().to_string()),
            verbose: Some(false),
            ..Default::default()
        }
    }

    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.header_path().trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "header_path must not be empty".to_string(),
            ));
        }

        if Path::new(self.output_path()).file_name().is_none() {
            return Err(ConfigError::InvalidConfig(format!(
                "output_path must name a file: {}",
                self.output_path()
            )));
        }

        if let Some(prefix) = &self.stub_prefix {
            if !is_identifier_prefix(prefix) {
                return Err(ConfigError::InvalidConfig(format!(
                    "stub_prefix is not a valid C identifier prefix: {}",
                    prefix
                )));
            }
        }

        let ignore_lists = [
            ("ignored_functions", &self.ignored_functions),
            ("ignored_constants", &self.ignored_constants),
            ("ignored_type_aliases", &self.ignored_type_aliases),
        ];
        for (field, names) in ignore_lists {
            if names.iter().any(|name| name.trim().is_empty()) {
                return Err(ConfigError::InvalidConfig(format!(
                    "{} contains an empty name",
                    field
                )));
            }
        }

        if let Some(includes) = &self.includes {
            if let Some(bad) = includes
                .iter()
                .find(|include| include.trim().is_empty() || include.contains(['"', '\n']))
            {
                return Err(ConfigError::InvalidConfig(format!(
                    "invalid include: {:?}",
                    bad
                )));
            }
        }

        Ok(())
    }

    /// Merge with another configuration, with other taking precedence.
    /// Ignore lists are concatenated.
    pub fn merge(&mut self, other: &GenerateConfig) {
        if other.dialect.is_some() {
            self.dialect = other.dialect;
        }
        if other.header_path.is_some() {
            self.header_path = other.header_path.clone();
        }
        if other.output_path.is_some() {
            self.output_path = other.output_path.clone();
        }
        if other.stub_prefix.is_some() {
            self.stub_prefix = other.stub_prefix.clone();
        }
        if other.sort.is_some() {
            self.sort = other.sort;
        }
        if other.dedup_type_aliases.is_some() {
            self.dedup_type_aliases = other.dedup_type_aliases;
        }
        extend_unique(&mut self.ignored_functions, &other.ignored_functions);
        extend_unique(&mut self.ignored_constants, &other.ignored_constants);
        extend_unique(&mut self.ignored_type_aliases, &other.ignored_type_aliases);
        if other.includes.is_some() {
            self.includes = other.includes.clone();
        }
        if other.banner.is_some() {
            self.banner = other.banner.clone();
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect.unwrap_or(Dialect::Gl)
    }

    pub fn header_path(&self) -> &str {
        self.header_path
            .as_deref()
            .unwrap_or_else(|| self.dialect().default_header_path())
    }

    pub fn output_path(&self) -> &str {
        self.output_path
            .as_deref()
            .unwrap_or_else(|| self.dialect().default_output_path())
    }

    /// Get effective sort setting
    pub fn should_sort(&self) -> bool {
        self.sort.unwrap_or_else(|| self.dialect().sorts_by_default())
    }

    /// Get effective dedup setting
    pub fn should_dedup_type_aliases(&self) -> bool {
        self.dedup_type_aliases.unwrap_or(true)
    }

    /// Get effective verbose setting
    pub fn is_verbose(&self) -> bool {
        self.verbose.unwrap_or(false)
    }

    pub fn effective_includes(&self) -> Vec<String> {
        self.includes
            .clone()
            .unwrap_or_else(|| self.dialect().default_includes())
    }

    /// Options handed to the model builder
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            stub_prefix: self.stub_prefix.clone(),
            sort: Some(self.should_sort()),
            dedup_type_aliases: self.should_dedup_type_aliases(),
            ignored_functions: self.ignored_functions.iter().cloned().collect(),
            ignored_constants: self.ignored_constants.iter().cloned().collect(),
            ignored_type_aliases: self.ignored_type_aliases.iter().cloned().collect(),
        }
    }
}

fn is_identifier_prefix(prefix: &str) -> bool {
    let mut chars = prefix.chars();
    match chars.next() {
        None => true,
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        Some(_) => false,
    }
}

fn extend_unique(target: &mut Vec<String>, extra: &[String]) {
    for name in extra {
        if !target.contains(name) {
            target.push(name.clone());
        }
    }
}
