use anyhow::Result;
use clap::{Parser, Subcommand};
use cytoform_core::init_logging;
use cytoform_lib::app::{self, report};
use cytoform_lib::model::layout::LayoutFile;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate one or more body plan files
    Report {
        /// Layout files to evaluate
        #[arg(short, long, required = true, num_args = 1..)]
        layout: Vec<PathBuf>,

        /// Custom config file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Extra organelle definitions
        #[arg(short, long)]
        registry: Option<PathBuf>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List known organelle ids
    Organelles {
        #[arg(short, long)]
        registry: Option<PathBuf>,
    },
    /// Print the effective configuration as TOML
    Config {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    match args.command {
        Command::Report {
            layout,
            config,
            registry,
            json,
        } => {
            let calculator = app::build_calculator(app::load_config(config.as_deref())?)?;
            let registry = app::load_registry(registry.as_deref())?;
            let format = if json {
                report::ReportFormat::Json
            } else {
                report::ReportFormat::Text
            };

            let blueprints = layout
                .iter()
                .map(|path| {
                    LayoutFile::load(path)
                        .and_then(|file| file.to_blueprint(&registry))
                        .map_err(|e| anyhow::anyhow!("{}: {e}", path.display()))
                })
                .collect::<Result<Vec<_>>>()?;

            for (path, stats) in layout.iter().zip(calculator.summarize_many(&blueprints)) {
                let stats = stats?;
                let name = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                println!("{}", report::render(&name, &stats, format)?);
            }
        }
        Command::Organelles { registry } => {
            let registry = app::load_registry(registry.as_deref())?;
            for id in registry.ids() {
                if let Some(def) = registry.get(id) {
                    print!(
                        "{id:<16}{:<16}hexes={} density={}",
                        def.name,
                        def.hexes.len(),
                        def.density
                    );
                    if def.has_movement_component() {
                        print!(" momentum={} torque={}", def.momentum(), def.torque());
                    }
                    println!();
                }
            }
        }
        Command::Config { config } => {
            let config = app::load_config(config.as_deref())?;
            println!("# fingerprint {}", config.fingerprint());
            print!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
