use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use sheetstack::config::Config;
use sheetstack::logging::init_tracing;
use sheetstack::replay::ReplayScript;
use sheetstack::Presenter;

#[derive(Debug, Parser)]
#[command(name = "sheetstack", version, about = "Modal presentation stack tools")]
struct Cli {
    /// Config file (defaults to the platform config dir).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run a TOML script of present/dismiss steps and print the result.
    Replay {
        script: PathBuf,
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Load and validate the config file.
    CheckConfig,
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Config::load().context("loading default config"),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    init_tracing(&config.logging);

    match cli.command {
        Command::Replay { script, json } => {
            let script = ReplayScript::load(&script)?;
            let presenter: Presenter<String> = Presenter::from_config(&config.presenter);
            let report = script.run(&presenter, config.host.max_depth);
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report).context("serializing report")?
                );
            } else {
                print!("{report}");
            }
        }
        Command::CheckConfig => {
            let path = cli.config.unwrap_or_else(Config::config_path);
            if path.exists() {
                println!("config OK: {}", path.display());
            } else {
                println!("no config at {}; using defaults", path.display());
            }
        }
    }

    Ok(())
}
