use clap::Parser;
use duk_bindgen::harness;
use duk_bindgen::interface::cli::{resolve_config, Cli, Commands};
use duk_bindgen::interface::config::{ConfigError, GenerateConfig};
use duk_bindgen::interface::output::{print_summary, Logger, ProgressReporter};
use duk_bindgen::interface::{emit, extract, report_model, GenerationSummary};
use std::path::Path;

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Generate { .. } => run_generate(&cli.command),
        Commands::Inspect { .. } => run_inspect(&cli.command),
        Commands::Init {
            output_path, force, ..
        } => run_init(&cli.command, output_path, *force),
        Commands::RunTest { source, debug, cmd } => run_test(source, cmd, *debug),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_generate(cmd: &Commands) -> duk_bindgen::Result<()> {
    let config = resolve_config(cmd)?;
    let logger = Logger::new(config.is_verbose(), false);
    let mut reporter = ProgressReporter::new(logger.clone(), 2);

    reporter.start_step(&format!("Scanning {}", config.header_path()));
    let model = match extract(&config) {
        Ok(model) => model,
        Err(e) => {
            reporter.fail_step(&e.to_string());
            return Err(e);
        }
    };
    reporter.complete_step(Some(&format!(
        "{} of {} lines matched",
        model.stats.lines_matched, model.stats.lines_scanned
    )));

    reporter.start_step(&format!("Writing {}", config.output_path()));
    let output_path = match emit(&model, &config) {
        Ok(path) => path,
        Err(e) => {
            reporter.fail_step(&e.to_string());
            return Err(e);
        }
    };
    reporter.complete_step(None);
    reporter.finish();

    report_model(&model, &config, &logger);
    print_summary(&GenerationSummary::from_model(&model, output_path));
    Ok(())
}

fn run_inspect(cmd: &Commands) -> duk_bindgen::Result<()> {
    let config = resolve_config(cmd)?;
    let model = extract(&config)?;
    let json = serde_json::to_string_pretty(&model).map_err(ConfigError::from)?;
    println!("{}", json);
    Ok(())
}

fn run_init(cmd: &Commands, output_path: &Path, force: bool) -> duk_bindgen::Result<()> {
    if output_path.exists() && !force {
        return Err(ConfigError::InvalidConfig(format!(
            "{} already exists. Use --force to overwrite it.",
            output_path.display()
        ))
        .into());
    }

    let config = GenerateConfig::try_from(cmd)?;
    config.save_to_file(output_path)?;
    println!("✓ Wrote {} ({} dialect)", output_path.display(), config.dialect());
    Ok(())
}

fn run_test(source: &Path, cmd: &[String], debug: bool) -> duk_bindgen::Result<()> {
    let logger = Logger::new(false, debug);
    let report = harness::run_test(source, cmd, &logger)?;
    print!("{}", report.render());
    Ok(())
}
