use crate::interface::config::{parse_dialect, ConfigError, GenerateConfig};
use crate::models::Dialect;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "duk-bindgen")]
#[command(version, about = "Generate Duktape binding skeletons from C headers")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a binding skeleton from a C header
    Generate {
        /// Header dialect (gl or glfw, default: gl)
        #[arg(short = 'd', long = "dialect")]
        dialect: Option<String>,

        /// Header to scan (default depends on the dialect)
        #[arg(short = 'i', long = "header")]
        header_path: Option<PathBuf>,

        /// Skeleton file to write (default: build/<dialect>_skeleton.h)
        #[arg(short = 'o', long = "output")]
        output_path: Option<PathBuf>,

        /// Prefix of generated stub symbols
        #[arg(long = "stub-prefix")]
        stub_prefix: Option<String>,

        /// Sort tables by exposed name (true or false)
        #[arg(long, value_name = "BOOL")]
        sort: Option<bool>,

        /// Native function to leave out (repeatable)
        #[arg(long = "ignore-function", value_name = "NAME")]
        ignored_functions: Vec<String>,

        /// Native constant to leave out (repeatable)
        #[arg(long = "ignore-constant", value_name = "NAME")]
        ignored_constants: Vec<String>,

        /// Typedef to leave out (repeatable)
        #[arg(long = "ignore-typedef", value_name = "NAME")]
        ignored_type_aliases: Vec<String>,

        /// Verbose output
        #[arg(long, action = clap::ArgAction::SetTrue)]
        verbose: bool,

        /// Configuration file path
        #[arg(short = 'c', long = "config")]
        config_file: Option<PathBuf>,
    },
    /// Write a configuration file with the defaults of a dialect
    Init {
        /// Header dialect (gl or glfw)
        #[arg(short = 'd', long = "dialect", default_value = "gl")]
        dialect: String,

        /// Output path for the configuration file
        #[arg(short = 'o', long = "output", default_value = "duk-bindgen.json")]
        output_path: PathBuf,

        /// Force overwrite existing configuration
        #[arg(long, action = clap::ArgAction::SetTrue)]
        force: bool,
    },
    /// Print the declarations extracted from a header as JSON
    Inspect {
        /// Header dialect (gl or glfw, default: gl)
        #[arg(short = 'd', long = "dialect")]
        dialect: Option<String>,

        /// Header to scan (default depends on the dialect)
        #[arg(short = 'i', long = "header")]
        header_path: Option<PathBuf>,

        /// Configuration file path
        #[arg(short = 'c', long = "config")]
        config_file: Option<PathBuf>,
    },
    /// Run a test command and compare its output with the expected block of a test case
    RunTest {
        /// Test case source holding the expected output
        #[arg(short = 's', long = "source")]
        source: PathBuf,

        /// Trace the parsed test case and captured output
        #[arg(short = 'd', long = "debug", action = clap::ArgAction::SetTrue)]
        debug: bool,

        /// Command to run, with its arguments
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        cmd: Vec<String>,
    },
}

impl Commands {
    /// Configuration file named on the command line, if any
    pub fn config_file(&self) -> Option<&Path> {
        match self {
            Commands::Generate { config_file, .. } | Commands::Inspect { config_file, .. } => {
                config_file.as_deref()
            }
            _ => None,
        }
    }
}

fn path_string(path: &Option<PathBuf>) -> Option<String> {
    path.as_ref().map(|p| p.to_string_lossy().to_string())
}

fn parse_optional_dialect(dialect: &Option<String>) -> Result<Option<Dialect>, ConfigError> {
    dialect.as_deref().map(parse_dialect).transpose()
}

/// Settings given on the command line. Flags that were not passed stay
/// unset so they do not override a configuration file.
impl TryFrom<&Commands> for GenerateConfig {
    type Error = ConfigError;

    fn try_from(cmd: &Commands) -> Result<Self, Self::Error> {
        match cmd {
            Commands::Generate {
                dialect,
                header_path,
                output_path,
                stub_prefix,
                sort,
                ignored_functions,
                ignored_constants,
                ignored_type_aliases,
                verbose,
                ..
            } => Ok(GenerateConfig {
                dialect: parse_optional_dialect(dialect)?,
                header_path: path_string(header_path),
                output_path: path_string(output_path),
                stub_prefix: stub_prefix.clone(),
                sort: *sort,
                ignored_functions: ignored_functions.clone(),
                ignored_constants: ignored_constants.clone(),
                ignored_type_aliases: ignored_type_aliases.clone(),
                verbose: verbose.then_some(true),
                ..Default::default()
            }),
            Commands::Inspect {
                dialect,
                header_path,
                ..
            } => Ok(GenerateConfig {
                dialect: parse_optional_dialect(dialect)?,
                header_path: path_string(header_path),
                ..Default::default()
            }),
            Commands::Init { dialect, .. } => {
                Ok(GenerateConfig::for_dialect(parse_dialect(dialect)?))
            }
            Commands::RunTest { .. } => Err(ConfigError::InvalidConfig(
                "run-test takes no generator configuration".to_string(),
            )),
        }
    }
}

/// Load the configuration file (if any) and apply the command line on top.
pub fn resolve_config(cmd: &Commands) -> Result<GenerateConfig, ConfigError> {
    let overrides = GenerateConfig::try_from(cmd)?;
    let mut config = match cmd.config_file() {
        Some(path) => GenerateConfig::from_file(path)?,
        None => GenerateConfig::new(),
    };
    config.merge(&overrides);
    config.validate()?;
    Ok(config)
}
