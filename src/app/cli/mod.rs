//! CLI Adapter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::app::commands::LaunchSettings;
use crate::app::commands::check::CheckOptions;
use crate::app::commands::plan::PlanFormat;
use crate::app::commands::start::StartOptions;
use crate::app::logging;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "ice-strap")]
#[command(version)]
#[command(
    about = "Validate sibling ICE repositories and start the preboot runtime and studio GUI",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct GlobalArgs {
    /// Launch root that repository offsets are resolved against (default: current directory)
    #[arg(long, global = true)]
    root: Option<PathBuf>,
    /// Built-in launch profile
    #[arg(
        short,
        long,
        global = true,
        env = "ICE_STRAP_PROFILE",
        default_value = crate::DEFAULT_PROFILE
    )]
    profile: String,
    /// Extra config file applied after the user and workspace layers
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Log resolution details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate repositories and start every step (default)
    #[clap(visible_alias = "s")]
    Start {
        /// Print the plan instead of starting anything
        #[arg(long, conflicts_with = "attach")]
        dry_run: bool,
        /// Stay in the foreground until every child exits
        #[arg(short, long)]
        attach: bool,
    },
    /// Report missing repositories, programs and directories
    #[clap(visible_alias = "c")]
    Check {
        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,
    },
    /// Print the resolved launch plan
    #[clap(visible_alias = "p")]
    Plan {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List built-in launch profiles
    Profiles,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl From<OutputFormat> for PlanFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => PlanFormat::Text,
            OutputFormat::Json => PlanFormat::Json,
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.global.verbose);

    let root = cli.global.root.clone();
    let launch =
        LaunchSettings { profile: cli.global.profile.clone(), config: cli.global.config.clone() };
    let command = cli.command.unwrap_or(Commands::Start { dry_run: false, attach: false });

    let result: Result<i32, AppError> = match command {
        Commands::Start { dry_run: true, .. } => {
            run_plan(root, launch, PlanFormat::Text).map(|_| 0)
        }
        Commands::Start { dry_run: false, attach } => {
            run_start(root, StartOptions { launch, dry_run: false, attach }).map(|_| 0)
        }
        Commands::Check { strict } => run_check(root, CheckOptions { launch, strict }),
        Commands::Plan { format } => run_plan(root, launch, format.into()).map(|_| 0),
        Commands::Profiles => {
            for name in crate::list_profiles() {
                println!("{}", name);
            }
            Ok(0)
        }
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("[ICE-STRAP][FATAL] {}", e);
            std::process::exit(1);
        }
    }
}

fn run_start(root: Option<PathBuf>, options: StartOptions) -> Result<(), AppError> {
    let outcome = crate::start(root, &options)?;

    for exited in &outcome.exited {
        match exited.code {
            Some(code) => println!("[ICE-STRAP] {} exited with code {}", exited.label, code),
            None => println!("[ICE-STRAP] {} terminated by signal", exited.label),
        }
    }
    Ok(())
}

fn run_check(root: Option<PathBuf>, options: CheckOptions) -> Result<i32, AppError> {
    let outcome = crate::check(root, &options)?;

    let errors = outcome.diagnostics.error_count();
    let warnings = outcome.diagnostics.warning_count();
    if errors == 0 && warnings == 0 {
        println!("[ICE-STRAP] launch ready ({})", outcome.layers.join(" + "));
    } else {
        println!("[ICE-STRAP] {} error(s), {} warning(s)", errors, warnings);
    }
    Ok(outcome.exit_code)
}

fn run_plan(
    root: Option<PathBuf>,
    launch: LaunchSettings,
    format: PlanFormat,
) -> Result<(), AppError> {
    let report = crate::plan(root, &launch)?;
    println!("{}", report.render(format)?.trim_end());
    Ok(())
}
