mod cmd;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cmd::{BuildArgs, ConfigArgs, PlatformArg, cmd_build, cmd_clean, cmd_info};
use output::print_error;

/// modroute-build - Build and stage the mod_route native library for packaging
#[derive(Parser)]
#[command(name = "modroute-build")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Project directory that relative paths resolve against
  #[arg(short = 'C', long = "dir", global = true, default_value = ".")]
  dir: PathBuf,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Build the shared library and copy it into the staging directory
  Build(BuildArgs),

  /// Show platform, library name and resolved configuration
  Info {
    /// Platform to report for (default: detected)
    #[arg(long, value_enum)]
    platform: Option<PlatformArg>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    config: ConfigArgs,
  },

  /// Remove the working build directory
  Clean {
    #[command(flatten)]
    config: ConfigArgs,
  },
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "info" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  match run(cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      print_error(&format!("{:#}", err));
      ExitCode::FAILURE
    }
  }
}

fn run(cli: Cli) -> Result<()> {
  match cli.command {
    Commands::Build(args) => cmd_build(&cli.dir, args),
    Commands::Info { platform, json, config } => cmd_info(&cli.dir, platform, config, json),
    Commands::Clean { config } => cmd_clean(&cli.dir, config),
  }
}
