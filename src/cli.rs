//! CLI interface for Mainframe.
//!
//! With no subcommand, opens the training terminal. `--domain` skips the
//! selector and starts straight into a mission.
//!
//! `mainframe missions` is non-interactive: it loads every domain through
//! the same catalog the terminal uses and reports what it found, so
//! mission content can be checked before anyone trains on it.

mod format;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::catalog::{BuiltinCatalog, DirectoryCatalog, LayeredCatalog, Mission};
use crate::config::Config;
use crate::engine::{Engine, EngineOptions};
use crate::logging::{self, LogTarget};
use crate::model::ExerciseDomain;
use crate::tui;

use format::format_mission;

/// Mainframe: terminal training missions.
#[derive(Debug, Parser)]
#[command(name = "mainframe", after_long_help = USAGE_HELP)]
pub struct Cli {
    /// Start straight into this domain's mission.
    #[arg(long, value_enum)]
    domain: Option<DomainArg>,

    /// Config file (default: `~/.mainframe/config.toml`).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory of generated mission plans; overrides `missions-dir`.
    #[arg(long, global = true)]
    missions_dir: Option<PathBuf>,

    /// Show briefings immediately instead of after a pause.
    #[arg(long)]
    no_delay: bool,

    /// Log file for the terminal session (default: `~/.mainframe/mainframe.log`).
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

const USAGE_HELP: &str = r"Training:
  mainframe                     choose a domain, then follow the briefings
  mainframe --domain git        start the version control mission directly

  In the terminal: type commands at the prompt, `hint` or Tab for the
  expected syntax, Esc to abort, Ctrl-C to quit.

Content:
  mainframe missions            load and list every domain's steps
  mainframe missions --domain docker --missions-dir ./plans";

#[derive(Debug, Subcommand)]
enum Command {
    /// List mission steps and check they load.
    ///
    /// Exits non-zero if any listed domain fails to load.
    Missions {
        /// Only this domain.
        #[arg(long, value_enum)]
        domain: Option<DomainArg>,
    },
}

/// CLI-facing domain, mapped to `ExerciseDomain`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DomainArg {
    Docker,
    Kubernetes,
    #[value(name = "postgresql", alias = "postgres")]
    PostgreSql,
    Git,
    Linux,
}

impl DomainArg {
    fn to_domain(self) -> ExerciseDomain {
        match self {
            Self::Docker => ExerciseDomain::Docker,
            Self::Kubernetes => ExerciseDomain::Kubernetes,
            Self::PostgreSql => ExerciseDomain::PostgreSql,
            Self::Git => ExerciseDomain::Git,
            Self::Linux => ExerciseDomain::Linux,
        }
    }
}

/// Run the CLI, returning an error message on failure.
pub fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let catalog = build_catalog(&config, cli.missions_dir)?;

    match cli.command {
        Some(Command::Missions { domain }) => {
            logging::init(LogTarget::Stderr)?;
            cmd_missions(&catalog, domain.map(DomainArg::to_domain))
        }
        None => {
            start_logging(cli.log_file);
            let options = if cli.no_delay {
                EngineOptions::immediate()
            } else {
                config.engine_options()
            };
            let engine = Engine::new(catalog, options);
            tui::run(engine, cli.domain.map(DomainArg::to_domain))
                .map_err(|e| format!("terminal error: {e}"))
        }
    }
}

fn build_catalog(config: &Config, missions_dir: Option<PathBuf>) -> Result<LayeredCatalog, String> {
    let builtin =
        BuiltinCatalog::load().map_err(|e| format!("built-in mission table is invalid: {e}"))?;
    let overlay = missions_dir
        .or_else(|| config.missions_dir.clone())
        .map(DirectoryCatalog::new);
    Ok(LayeredCatalog::new(overlay, builtin))
}

/// File logging for the terminal. Falls back to discarding if the file
/// cannot be opened; the session is more important than its log.
fn start_logging(explicit: Option<PathBuf>) {
    let target = explicit
        .or_else(LogTarget::default_file)
        .map_or(LogTarget::Discard, LogTarget::File);
    if let Err(e) = logging::init(target) {
        eprintln!("warning: {e}; logging disabled");
        let _ = logging::init(LogTarget::Discard);
    }
}

fn cmd_missions(catalog: &LayeredCatalog, only: Option<ExerciseDomain>) -> Result<(), String> {
    let domains: Vec<ExerciseDomain> = match only {
        Some(domain) => vec![domain],
        None => ExerciseDomain::ALL.to_vec(),
    };

    let mut failed = 0;
    for (i, domain) in domains.iter().enumerate() {
        if i > 0 {
            println!();
        }
        match Mission::fetch(catalog, *domain) {
            Ok(mission) => print!("{}", format_mission(&mission)),
            Err(e) => {
                println!("{domain}  [error] {e}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(format!("{failed} domain(s) failed to load"));
    }
    Ok(())
}
