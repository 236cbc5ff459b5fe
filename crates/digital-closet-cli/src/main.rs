use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use digital_closet_core::{logging, Category, Closet, Config, LogLevel};
use log::{info, LevelFilter};
use std::path::PathBuf;

mod gui;

#[derive(Parser)]
#[command(name = "digital-closet")]
#[command(about = "Browse tops and bottoms side by side")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command that reads the closet directories
#[derive(Args)]
struct ClosetArgs {
    /// Directory holding images of tops
    #[arg(long)]
    top: Option<PathBuf>,

    /// Directory holding images of bottoms
    #[arg(long)]
    bottom: Option<PathBuf>,

    /// List every directory entry, not only files with an image extension
    #[arg(long)]
    all_entries: bool,

    /// Write logs to rotating files in this directory instead of stderr
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the closet window
    Open(ClosetArgs),

    /// Check the image directories without opening a window
    Validate(ClosetArgs),

    /// Generate default configuration file
    GenerateConfig {
        /// Path to save configuration file
        #[arg(default_value = "digital-closet.json")]
        path: PathBuf,
    },
}

fn main() -> Result<(), anyhow::Error> {
    // Parse command line arguments
    let cli = Cli::parse();

    match cli.command {
        Commands::Open(args) => {
            let config = prepare(args)?;
            let closet = Closet::open(&config)?;

            info!("Opening closet window...");
            gui::run(closet, config)?;
            Ok(())
        }

        Commands::Validate(args) => {
            let config = prepare(args)?;
            let closet = Closet::open(&config)?;

            for category in Category::ALL {
                println!(
                    "{}: {} images in {}",
                    category,
                    closet.image_set(category).len(),
                    closet.directory(category).display()
                );
            }
            Ok(())
        }

        Commands::GenerateConfig { path } => {
            env_logger::init();
            let config = Config::default();
            config.save_to_file(&path)?;
            println!("Configuration file generated at: {}", path.display());
            Ok(())
        }
    }
}

/// Load the configuration, apply command line overrides and start logging
fn prepare(args: ClosetArgs) -> anyhow::Result<Config> {
    // Set up configuration
    let mut config = if let Some(config_path) = &args.config {
        Config::from_file(config_path)
            .with_context(|| format!("loading {}", config_path.display()))?
    } else {
        Config::default()
    };

    // Override config with command line arguments
    if let Some(top) = args.top {
        config.top_directory = Some(top);
    }
    if let Some(bottom) = args.bottom {
        config.bottom_directory = Some(bottom);
    }
    if args.all_entries {
        config.images_only = false;
    }

    // Set log level based on verbosity
    config.log_level = match args.verbose {
        0 => config.log_level,
        1 => LogLevel::Debug,
        _ => LogLevel::Trace,
    };

    // Validate configuration
    config.validate()?;

    let level = LevelFilter::from(config.log_level);
    match &args.log_dir {
        Some(dir) => logging::init_logger(dir, level)?,
        None => env_logger::Builder::new()
            .filter_level(level)
            .parse_env(logging::LOG_ENV_VAR)
            .init(),
    }

    Ok(config)
}
