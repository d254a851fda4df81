use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use attack_path_cli::{pipeline, report};
use attack_path_core::config::{AttackPathConfig, CliOverrides};
use attack_path_graph::scenario::demo_scenario;
use attack_path_graph::Scenario;
use clap::{Parser, Subcommand};

/// Exit status when the search completes but no attack path exists.
const EXIT_NO_PATH: u8 = 2;

#[derive(Parser)]
#[command(name = "attack-path", version, about = "Minimum attack path analysis over attack graphs")]
struct Args {
    /// Directory searched for attack-path.toml.
    #[arg(long, global = true, default_value = ".")]
    config_dir: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find the minimum attack path in a scenario file.
    Analyze {
        scenario: PathBuf,
        /// Attacker entry state. Defaults to the scenario's `source`.
        #[arg(long)]
        source: Option<String>,
        /// Target state. Defaults to the scenario's critical asset.
        #[arg(long)]
        target: Option<String>,
        #[arg(short, long)]
        out: Option<PathBuf>,
        #[arg(long, value_parser = ["dot", "json"])]
        format: Option<String>,
        /// Reject steps that reference undeclared states.
        #[arg(long)]
        strict: bool,
    },
    /// Run the built-in internet-to-database demo network.
    Demo {
        #[arg(short, long)]
        out: Option<PathBuf>,
        #[arg(long, value_parser = ["dot", "json"])]
        format: Option<String>,
    },
}

fn main() -> Result<ExitCode> {
    attack_path_core::tracing::init_tracing();
    let args = Args::parse();
    match args.command {
        Command::Analyze {
            scenario,
            source,
            target,
            out,
            format,
            strict,
        } => {
            let overrides = CliOverrides {
                source,
                output_path: out,
                output_format: format,
                strict_nodes: strict.then_some(true),
            };
            let scenario = Scenario::load(&scenario)
                .with_context(|| format!("loading scenario {}", scenario.display()))?;
            run(&args.config_dir, &scenario, &overrides, target.as_deref())
        }
        Command::Demo { out, format } => {
            let overrides = CliOverrides {
                output_path: out,
                output_format: format,
                ..Default::default()
            };
            run(&args.config_dir, &demo_scenario(), &overrides, None)
        }
    }
}

fn run(
    config_dir: &std::path::Path,
    scenario: &Scenario,
    overrides: &CliOverrides,
    target: Option<&str>,
) -> Result<ExitCode> {
    let config = AttackPathConfig::load(config_dir, Some(overrides))?;
    let analysis = pipeline::analyze(scenario, &config, target)?;

    print!("{}", report::format_report(&analysis));

    // Written even when no path exists.
    let written = pipeline::write_output(&analysis, &config)?;
    println!("Graph written to {}", written.display());

    if analysis.outcome.is_found() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_NO_PATH))
    }
}
