//! Rangebrush CLI: drive the range selector without a terminal UI.
//!
//! Commands:
//! - `replay`: run a TOML/JSON event script and print what a view would show after each event
//! - `scale`: print the value/pixel mapping for a domain and track geometry
//! - `check-config`: validate a selector config file and print the resolved settings

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rangebrush_core::{replay, Domain, Replay, Script, ScriptEvent, SelectorConfig};

#[derive(Parser)]
#[command(
    name = "rangebrush",
    about = "Rangebrush CLI: range selector scripting and inspection"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay an event script against a fresh selector.
    Replay {
        /// Script file (.toml or .json).
        script: PathBuf,

        /// Selector config (TOML). Defaults to the built-in geometry.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the full replay as JSON instead of a table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the value/pixel mapping of a domain.
    Scale {
        #[arg(long, allow_hyphen_values = true)]
        min: f64,

        #[arg(long, allow_hyphen_values = true)]
        max: f64,

        /// Number of evenly spaced rows, both ends included.
        #[arg(long, default_value_t = 5)]
        steps: usize,

        /// Selector config (TOML). Defaults to the built-in geometry.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Validate a selector config file.
    CheckConfig {
        /// Path to the TOML config.
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Replay {
            script,
            config,
            json,
        } => cmd_replay(&script, config.as_deref(), json),
        Commands::Scale {
            min,
            max,
            steps,
            config,
        } => cmd_scale(min, max, steps, config.as_deref()),
        Commands::CheckConfig { path } => cmd_check_config(&path),
    }
}

fn load_config(path: Option<&Path>) -> Result<SelectorConfig> {
    match path {
        Some(path) => SelectorConfig::load(path)
            .with_context(|| format!("Invalid config: {}", path.display())),
        None => Ok(SelectorConfig::default()),
    }
}

fn cmd_replay(script_path: &Path, config: Option<&Path>, json: bool) -> Result<()> {
    let config = load_config(config)?;
    let script = Script::load(script_path)
        .with_context(|| format!("Failed to load script: {}", script_path.display()))?;
    tracing::info!(events = script.events.len(), "replaying {}", script_path.display());

    let replay = replay(&script, &config)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&replay)?);
    } else {
        print!("{}", render_replay(&replay));
    }
    Ok(())
}

fn describe(event: &ScriptEvent) -> String {
    match event {
        ScriptEvent::Drag { x0, x1 } => format!("drag {x0}..{x1}px"),
        ScriptEvent::EndDrag => "end drag".into(),
        ScriptEvent::CancelDrag => "cancel drag".into(),
        ScriptEvent::Select { start, end } => format!("select [{start}, {end}]"),
        ScriptEvent::Edit { endpoint, text } => format!("type {endpoint} {text:?}"),
        ScriptEvent::Commit => "enter".into(),
        ScriptEvent::Blur => "blur".into(),
        ScriptEvent::Cancel => "escape".into(),
        ScriptEvent::UpdateDomain { min, max } => format!("domain [{min}, {max}]"),
    }
}

fn render_replay(replay: &Replay) -> String {
    let mut out = String::new();
    out.push_str(&format!("Initial selection: {}\n\n", replay.initial));
    out.push_str(&format!(
        "{:>3}  {:<24} {:<22} {:<10} {:<10} {}\n",
        "#", "Event", "Selection", "Min", "Max", "Notes"
    ));
    out.push_str(&format!("{}\n", "-".repeat(84)));

    for step in &replay.steps {
        let mut notes = Vec::new();
        if let Some(pending) = step.pending {
            notes.push(format!("brush {pending}"));
        }
        for commit in &step.commits {
            notes.push(format!("commit {commit}"));
        }
        if let Some(msg) = &step.validation {
            notes.push(format!("! {msg}"));
        }
        out.push_str(&format!(
            "{:>3}  {:<24} {:<22} {:<10} {:<10} {}\n",
            step.index,
            describe(&step.event),
            step.selection.to_string(),
            step.start_text,
            step.end_text,
            notes.join("; ")
        ));
    }

    let commits = replay.commits();
    out.push_str(&format!(
        "\n{} commit(s); final selection {}\n",
        commits.len(),
        replay.final_selection()
    ));
    out
}

fn cmd_scale(min: f64, max: f64, steps: usize, config: Option<&Path>) -> Result<()> {
    if steps < 2 {
        bail!("--steps must be at least 2, got {steps}");
    }
    let config = load_config(config)?;
    let domain = Domain::new(min, max)?;
    print!("{}", render_scale(&domain, &config, steps));
    Ok(())
}

fn render_scale(domain: &Domain, config: &SelectorConfig, steps: usize) -> String {
    let scale = rangebrush_core::LinearScale::new(domain, &config.geometry);
    let mut out = format!(
        "Domain [{}, {}] over {}px (track {}px, margins {}px / {}px)\n\n",
        domain.min(),
        domain.max(),
        scale.width(),
        config.geometry.track_width_px(),
        config.geometry.left_margin_px(),
        config.geometry.right_margin_px(),
    );
    out.push_str(&format!("{:>14} {:>12}\n", "Value", "Pixel"));
    out.push_str(&format!("{}\n", "-".repeat(27)));
    for i in 0..steps {
        let v = domain.min() + domain.span() * i as f64 / (steps - 1) as f64;
        out.push_str(&format!("{:>14.4} {:>12.2}\n", v, scale.domain_to_pixel(v)));
    }
    out
}

fn cmd_check_config(path: &Path) -> Result<()> {
    let config =
        SelectorConfig::load(path).with_context(|| format!("Invalid config: {}", path.display()))?;
    println!("Config OK: {}", path.display());
    println!("  track width:   {}px", config.geometry.track_width_px());
    println!("  left margin:   {}px", config.geometry.left_margin_px());
    println!("  right margin:  {}px", config.geometry.right_margin_px());
    println!("  range width:   {}px", config.geometry.effective_width());
    println!("  settle delay:  {}ms", config.settle_ms);
    Ok(())
}
