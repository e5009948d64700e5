use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use dynamic_ui_native::{
    component_id, generate_components_mapping, init_tracing, ModuleOptions, WriteOutcome,
};

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Component mapping generator for declarative pages.
#[derive(Parser)]
#[command(name = "dynamic-ui", version, about = "Component mapping generator")]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Log at debug level unless DYNAMIC_UI_LOG says otherwise
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan component directories and write the components mapping
    Generate {
        /// Project root the scan directories are relative to
        #[arg(long, default_value = ".")]
        root: PathBuf,
        /// JSON file with module options
        #[arg(long)]
        config: Option<PathBuf>,
        /// Directory to scan (repeatable); replaces the configured list
        #[arg(long = "dir")]
        dirs: Vec<String>,
        /// Artifact path, relative to the root unless absolute
        #[arg(long)]
        out: Option<PathBuf>,
        /// Skip the JSON manifest
        #[arg(long)]
        no_manifest: bool,
    },

    /// Print the deterministic entry ID for a key and props
    Id {
        key: String,
        /// Props as a JSON value
        #[arg(long)]
        props: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(if cli.verbose { "debug" } else { "info" });

    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Generate {
            root,
            config,
            dirs,
            out,
            no_manifest,
        } => {
            let mut options = match config {
                Some(path) => {
                    let json = fs::read_to_string(&path)
                        .with_context(|| format!("failed to read config '{}'", path.display()))?;
                    ModuleOptions::from_json(&json)
                        .with_context(|| format!("invalid config '{}'", path.display()))?
                }
                None => ModuleOptions::default(),
            };
            if !dirs.is_empty() {
                options.target_dirs = dirs;
            }
            if let Some(out) = out {
                options.output_file = out;
            }
            if no_manifest {
                options.manifest = false;
            }

            let report = generate_components_mapping(&root, &options)
                .context("components mapping generation failed")?;

            match cli.output {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                OutputFormat::Text => {
                    let status = match report.outcome {
                        WriteOutcome::Written => "generated",
                        WriteOutcome::Unchanged => "unchanged",
                    };
                    println!(
                        "{} {} ({} components)",
                        status,
                        report.output_file.display(),
                        report.components.len()
                    );
                }
            }
        }
        Commands::Id { key, props } => {
            let props = props
                .map(|json| serde_json::from_str::<serde_json::Value>(&json))
                .transpose()
                .context("props must be valid JSON")?;
            let id = component_id(&key, props.as_ref());

            match cli.output {
                OutputFormat::Json => println!("{}", serde_json::json!({ "key": key, "id": id })),
                OutputFormat::Text => println!("{}", id),
            }
        }
    }
    Ok(())
}
