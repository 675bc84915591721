//! autopilot-launcher - open the autopilot worker in a new terminal window
//!
//! Without a subcommand this launches the worker (and the dashboard). Exit
//! status is 0 when the worker window opened and 1 otherwise.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use tracing::{debug, error, info};

use autopilot_launcher::dashboard::{self, ProgressFiles};
use autopilot_launcher::{prepare, LaunchOutcome, Platform};

#[derive(Debug, Parser)]
#[command(name = "autopilot-launcher", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    launch: LaunchArgs,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Open the worker and dashboard windows (default)
    Launch(LaunchArgs),
    /// Print the terminal that would be used
    Detect(TargetArgs),
    /// Print the manual launch instructions
    Instructions(TargetArgs),
    /// Run the live progress dashboard
    Watch {
        /// Project root (default: current directory)
        root: Option<PathBuf>,
    },
    /// Ask the worker to pause after its current iteration
    Pause {
        root: Option<PathBuf>,
    },
    /// Remove the pause marker
    Resume {
        root: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
struct TargetArgs {
    /// Configuration file (skips the search paths)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Platform row to use instead of the host's (windows, macos, linux)
    #[arg(long, value_name = "PLATFORM")]
    platform: Option<Platform>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
struct LaunchArgs {
    #[command(flatten)]
    target: TargetArgs,

    /// Do not open the progress dashboard
    #[arg(long)]
    no_dashboard: bool,

    /// Print the outcome as JSON on stdout
    #[arg(long)]
    json: bool,
}

impl LaunchArgs {
    /// Combine flags given before `launch` with the ones after it
    fn merge(self, outer: LaunchArgs) -> LaunchArgs {
        LaunchArgs {
            target: TargetArgs {
                config: self.target.config.or(outer.target.config),
                platform: self.target.platform.or(outer.target.platform),
            },
            no_dashboard: self.no_dashboard || outer.no_dashboard,
            json: self.json || outer.json,
        }
    }

    fn is_empty(&self) -> bool {
        *self == LaunchArgs::default()
    }
}

/// The subcommand to run, with top-level launch flags folded in
fn command(cli: Cli) -> Result<Command> {
    match cli.command {
        None => Ok(Command::Launch(cli.launch)),
        Some(Command::Launch(args)) => Ok(Command::Launch(args.merge(cli.launch))),
        Some(_) if !cli.launch.is_empty() => {
            bail!("launch options must come with `launch` or without a subcommand")
        }
        Some(command) => Ok(command),
    }
}

fn init_logging(debug: bool) {
    let log_level = if debug { "debug" } else { "info" };
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);
    debug!("Starting {} v{}", autopilot_launcher::NAME, autopilot_launcher::VERSION);

    let code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            1
        }
    };
    process::exit(code);
}

fn run(cli: Cli) -> Result<i32> {
    match command(cli)? {
        Command::Launch(args) => launch(args),
        Command::Detect(args) => detect(args),
        Command::Instructions(args) => instructions(args),
        Command::Watch { root } => {
            let root = project_root(root)?;
            dashboard::run(&root)
                .with_context(|| format!("dashboard for {}", root.display()))?;
            Ok(0)
        }
        Command::Pause { root } => {
            let files = ProgressFiles::new(project_root(root)?);
            files.pause()?;
            info!("Paused: {}", files.pause.display());
            Ok(0)
        }
        Command::Resume { root } => {
            let files = ProgressFiles::new(project_root(root)?);
            files.resume()?;
            info!("Resumed: removed {}", files.pause.display());
            Ok(0)
        }
    }
}

fn launch(args: LaunchArgs) -> Result<i32> {
    let platform = args.target.platform.unwrap_or_else(Platform::current);
    let mut launcher = prepare(platform, args.target.config.as_deref())
        .context("could not prepare launch")?;

    if args.no_dashboard {
        launcher = launcher.without_dashboard();
    }

    // keep stdout pure JSON when asked for it
    let outcome = if args.json {
        launcher.launch_worker(&mut io::stderr())
    } else {
        launcher.launch_worker(&mut io::stdout())
    };

    if args.json {
        let mut stdout = io::stdout().lock();
        serde_json::to_writer(&mut stdout, &outcome)?;
        writeln!(stdout)?;
    }

    if let LaunchOutcome::Failure { reason, .. } = &outcome {
        debug!("Launch failed: {:?}", reason);
    }
    Ok(outcome.exit_code())
}

fn detect(args: TargetArgs) -> Result<i32> {
    let platform = args.platform.unwrap_or_else(Platform::current);
    let launcher = prepare(platform, args.config.as_deref())?;

    match launcher.resolve() {
        Some(terminal) => {
            println!("{} ({})", terminal.probe_name, terminal.display_name);
            Ok(0)
        }
        None => {
            println!("No supported terminal found on {}", platform.display_name());
            Ok(1)
        }
    }
}

fn instructions(args: TargetArgs) -> Result<i32> {
    let platform = args.platform.unwrap_or_else(Platform::current);
    let launcher = prepare(platform, args.config.as_deref())?;
    print!("{}", launcher.instructions());
    Ok(0)
}

fn project_root(root: Option<PathBuf>) -> Result<PathBuf> {
    match root {
        Some(root) => Ok(root),
        None => std::env::current_dir().context("could not read current directory"),
    }
}
