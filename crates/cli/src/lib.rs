mod app;
mod input;
mod view;

use anyhow::{Context, Result};
use app::{App, AppOptions};
use gachapull_data::default_state_path;
use input::{parse_command, Command};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const DEFAULT_CATALOG: &str = "assets/pokemon_data.json";

#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    pub catalog: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub save: Option<PathBuf>,
    pub seed: Option<u64>,
    /// Words of a single command to run instead of the prompt.
    pub command: Vec<String>,
}

pub fn run_with_args(args: &[String]) -> Result<()> {
    init_logging();
    let options = parse_options(args);
    run(options)
}

pub fn run(options: LaunchOptions) -> Result<()> {
    let app_options = AppOptions {
        catalog: options
            .catalog
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG)),
        config: options.config,
        save: options.save.or_else(default_state_path),
        seed: options.seed,
    };
    let mut app = App::bootstrap(&app_options)
        .with_context(|| format!("start with catalog {}", app_options.catalog.display()))?;

    if !options.command.is_empty() {
        let command = parse_command(&options.command.join(" "));
        // One-shot pulls have no later reveal step.
        let reveal = matches!(
            command,
            Command::Pull(_) | Command::GuaranteedLegendary | Command::GuaranteedRare
        );
        let mut output = app.execute(command);
        if reveal && !app.grid.cards().is_empty() {
            output = app.execute(Command::Reveal(None));
        }
        println!("{output}");
        return Ok(());
    }
    run_prompt(&mut app)
}

fn run_prompt(app: &mut App) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    println!("{}", app.execute(Command::Status));
    println!("type 'help' for commands");
    let mut lines = stdin.lock().lines();
    while !app.should_quit {
        print!("> ");
        stdout.flush().context("flush stdout")?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("read command")?;
        let output = app.execute(parse_command(&line));
        if !output.is_empty() {
            println!("{output}");
        }
    }
    Ok(())
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("GACHAPULL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn parse_options(args: &[String]) -> LaunchOptions {
    let mut options = LaunchOptions::default();
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--catalog" | "-c" => {
                if let Some(value) = args.get(idx + 1) {
                    options.catalog = Some(PathBuf::from(value));
                    idx += 1;
                }
            }
            "--config" => {
                if let Some(value) = args.get(idx + 1) {
                    options.config = Some(PathBuf::from(value));
                    idx += 1;
                }
            }
            "--save" => {
                if let Some(value) = args.get(idx + 1) {
                    options.save = Some(PathBuf::from(value));
                    idx += 1;
                }
            }
            "--seed" => {
                if let Some(value) = args.get(idx + 1) {
                    options.seed = value.parse::<u64>().ok();
                    idx += 1;
                }
            }
            other => options.command.push(other.to_string()),
        }
        idx += 1;
    }
    options
}
