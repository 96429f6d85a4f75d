//! Nexcraft CLI
//!
//! Command-line interface for converting Nexo packs into CraftEngine packs

mod assets;
mod commands;
mod manifest;
mod output;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use colored::Colorize;
use nexcraft_core::{ConfigLoader, ConverterConfig, init_tracing};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

#[derive(Parser)]
#[command(name = "nexcraft")]
#[command(about = "Convert Nexo item packs into CraftEngine packs")]
#[command(version = nexcraft_core::VERSION)]
#[command(
    long_about = "Nexcraft migrates a Nexo pack (item definitions and resource pack assets)\n\
into a CraftEngine pack: items with model wiring, an i18n table, a category tree\n\
and a report of custom model data usage.\n\
\n\
Examples:\n  \
nexcraft init                      # Create logs/, input/ and output/\n  \
nexcraft convert                   # Convert input/ into output/\n  \
nexcraft convert -n mypack         # Use a custom namespace\n  \
nexcraft convert --input pack -vv  # Convert another folder with info logs"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path
    #[arg(
        short,
        long,
        global = true,
        help = "Path to configuration file (nexcraft.yaml/.toml/.json)"
    )]
    config: Option<PathBuf>,

    /// Verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Keep log files from previous runs
    #[arg(long, global = true)]
    keep_logs: bool,

    /// Generate shell completion script
    #[arg(
        long,
        value_enum,
        help = "Generate completion script for specified shell"
    )]
    generate_completion: Option<Shell>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a Nexo pack into a CraftEngine pack
    Convert {
        /// Namespace prefixed to every generated key
        #[arg(short, long, env = "NAMESPACE", help = "Namespace for generated keys")]
        namespace: Option<String>,

        /// Nexo pack root (items are read from <input>/items)
        #[arg(short, long, help = "Input folder (default: input)")]
        input: Option<PathBuf>,

        /// CraftEngine pack root
        #[arg(short, long, help = "Output folder (default: output)")]
        output: Option<PathBuf>,

        /// Extra directory names to skip while scanning items
        #[arg(long, help = "Skip item folders with this name (repeatable)")]
        blacklist: Vec<String>,

        /// Remove previously generated configuration before converting
        #[arg(long, help = "Clean generated configuration before converting")]
        clean: bool,

        /// Skip copying resource pack assets
        #[arg(long, help = "Do not copy input/pack/assets")]
        skip_assets: bool,

        /// Show progress during conversion
        #[arg(long, help = "Show a progress spinner")]
        progress: bool,
    },

    /// Create the working folders and a default configuration file
    Init {
        /// Do not write nexcraft.yaml
        #[arg(long, help = "Skip writing a default nexcraft.yaml")]
        no_config: bool,
    },

    /// Show version information
    #[command(alias = "ver")]
    Version {
        /// Show detailed version information
        #[arg(long, help = "Show detailed version and build information")]
        detailed: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(shell) = cli.generate_completion {
        generate_completion_script(shell);
        return ExitCode::SUCCESS;
    }

    if cli.no_color || std::env::var("NO_COLOR").is_ok() {
        colored::control::set_override(false);
    }

    let config = match load_configuration(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    let console_filter = match (cli.quiet, cli.verbose) {
        (true, _) => "nexcraft=error",
        (false, 0) => "nexcraft=warn",
        (false, 1) => "nexcraft=info",
        (false, 2) => "nexcraft=debug",
        _ => "nexcraft=trace",
    };

    let writes_logs = matches!(
        cli.command,
        Some(Commands::Convert { .. }) | Some(Commands::Init { .. })
    );
    let log_dir = if writes_logs {
        commands::prepare_log_dir(&config.logs, !cli.keep_logs)
    } else {
        None
    };
    let _guard = init_tracing(console_filter, log_dir.as_deref());

    match run_command(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Nexcraft failed: {:#}", e);
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn generate_completion_script(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}

/// Load the config file and apply command-line overrides
fn load_configuration(cli: &Cli) -> anyhow::Result<ConverterConfig> {
    let mut config = ConfigLoader::load(cli.config.as_deref(), None)?;

    if let Some(Commands::Convert {
        namespace,
        input,
        output,
        blacklist,
        ..
    }) = &cli.command
    {
        if let Some(namespace) = namespace {
            config.namespace = namespace.clone();
        }
        if let Some(input) = input {
            config.input = input.clone();
        }
        if let Some(output) = output {
            config.output = output.clone();
        }
        for name in blacklist {
            if !config.folder_blacklist.contains(name) {
                config.folder_blacklist.push(name.clone());
            }
        }
        config.validate()?;
    }

    Ok(config)
}

fn run_command(cli: Cli, config: ConverterConfig) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::Convert {
            clean,
            skip_assets,
            progress,
            ..
        }) => {
            let options = commands::convert::ConvertOptions {
                clean,
                skip_assets,
                progress,
            };
            commands::convert::convert_command(&config, &options).map(|_| ())
        }

        Some(Commands::Init { no_config }) => commands::init::init_command(&config, no_config),

        Some(Commands::Version { detailed }) => {
            if detailed {
                println!("nexcraft {}", nexcraft_core::VERSION);
                println!("Build information:");
                println!("  Target: {}", std::env::consts::ARCH);
                println!("  OS: {}", std::env::consts::OS);
            } else {
                println!("{}", nexcraft_core::VERSION);
            }
            Ok(())
        }

        None => {
            let mut cmd = Cli::command();
            cmd.print_help()?;
            Ok(())
        }
    }
}
