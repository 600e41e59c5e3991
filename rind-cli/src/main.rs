// rind - locate and run scripts through configured search paths

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use rind_loader::{
    dispatch, render_failure, suggest_similar, Config, ExecHost, LoadOutcome, Resolution,
    Resolver, LOAD_LABEL, SOURCE_LABEL,
};

#[derive(Parser)]
#[command(name = "rind")]
#[command(version)]
#[command(about = "Locate and run rind scripts", long_about = None)]
struct Cli {
    /// Config file (default: ./rind.json, then ~/.rind/config.json)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a script by name and run it
    Source {
        /// Script name or literal path
        #[arg(value_name = "NAME")]
        name: String,

        /// Interpreter command overriding the configured one
        #[arg(short, long, value_name = "CMD")]
        interpreter: Option<String>,

        /// Arguments forwarded to the script (after --)
        #[arg(last = true)]
        args: Vec<String>,
    },

    /// Same as source, reported under the lenient label
    Load {
        /// Script name or literal path
        #[arg(value_name = "NAME")]
        name: String,

        /// Interpreter command overriding the configured one
        #[arg(short, long, value_name = "CMD")]
        interpreter: Option<String>,

        /// Arguments forwarded to the script (after --)
        #[arg(last = true)]
        args: Vec<String>,
    },

    /// Print the path a name resolves to, without running anything
    Resolve {
        /// Script name or literal path
        #[arg(value_name = "NAME")]
        name: String,

        /// Machine-readable output
        #[arg(long)]
        json: bool,
    },

    /// List the active search path templates in precedence order
    Paths,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Source {
            name,
            interpreter,
            args,
        } => run_script(&config, SOURCE_LABEL, &name, interpreter.as_deref(), &args),
        Commands::Load {
            name,
            interpreter,
            args,
        } => run_script(&config, LOAD_LABEL, &name, interpreter.as_deref(), &args),
        Commands::Resolve { name, json } => resolve_only(&config, &name, json),
        Commands::Paths => show_paths(&config),
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::from_file(path),
        None => Config::load(),
    }
}

fn build_resolver(config: &Config) -> Result<Resolver> {
    let paths = config.build_search_paths()?;
    log::debug!("{} search path templates active", paths.len());
    Ok(Resolver::with_paths(paths))
}

fn run_script(
    config: &Config,
    label: &str,
    name: &str,
    interpreter: Option<&str>,
    args: &[String],
) -> Result<()> {
    let resolver = build_resolver(config)?;
    let command = interpreter.unwrap_or(&config.interpreter);
    let mut host = ExecHost::from_command(command)?;

    let outcome = dispatch(&resolver, &mut host, name, args)?;
    finish(label, &resolver, outcome)
}

fn resolve_only(config: &Config, name: &str, json: bool) -> Result<()> {
    let resolver = build_resolver(config)?;
    if name.is_empty() {
        return finish("resolve", &resolver, LoadOutcome::MissingName);
    }

    match resolver.resolve(name) {
        Resolution::Resolved(path) => {
            if json {
                println!(
                    "{}",
                    serde_json::json!({ "resolved": path.display().to_string() })
                );
            } else {
                println!("{}", path.display());
            }
            Ok(())
        }
        Resolution::Exhausted(tried) => {
            if json {
                let paths: Vec<String> =
                    tried.iter().map(|c| c.path.display().to_string()).collect();
                println!(
                    "{}",
                    serde_json::json!({
                        "error": format!("no script called '{}'", name),
                        "tried": paths,
                    })
                );
                std::process::exit(1);
            }
            let outcome = LoadOutcome::NotFound {
                name: name.to_string(),
                tried,
            };
            finish("resolve", &resolver, outcome)
        }
    }
}

fn show_paths(config: &Config) -> Result<()> {
    let resolver = build_resolver(config)?;
    for template in resolver.search_paths().iter() {
        println!("{}", template);
    }
    Ok(())
}

/// Report a failed outcome and terminate with its status. Returns only when
/// the script loaded; a loaded script's own non-zero status is forwarded as
/// the process status.
fn finish(label: &str, resolver: &Resolver, outcome: LoadOutcome) -> Result<()> {
    if let Some(report) = render_failure(label, &outcome) {
        eprintln!("{}", report);
        if let LoadOutcome::NotFound { name, .. } = &outcome {
            if let Some(suggestion) = suggest_similar(name, resolver.search_paths()) {
                eprintln!("\thelp: did you mean '{}'?", suggestion);
            }
        }
        std::process::exit(outcome.exit_status());
    }

    if let LoadOutcome::Loaded { status, .. } = outcome {
        if status != 0 {
            std::process::exit(status);
        }
    }
    Ok(())
}
