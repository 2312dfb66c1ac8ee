use std::path::PathBuf;
use std::process;

use clap::Parser;
use jackbox_localizer::commands::install::{self, Progress, RunSummary};
use jackbox_localizer::config::Settings;
use jackbox_localizer::logging;
use jackbox_localizer::LocalizerError;

#[derive(Parser)]
#[command(name = "jackbox-localizer")]
#[command(about = "Install localization archives into Jackbox Party Pack games")]
#[command(version)]
struct Cli {
    /// Path to directory where you put all archived localizations that you want to install
    #[arg(short = 'i', long)]
    rus_zip_folder: PathBuf,

    /// Disables actual copying into game files
    #[arg(long)]
    dry_run: bool,

    /// Steam steamapps/common directory (defaults to the standard macOS location)
    #[arg(long)]
    steam_dir: Option<PathBuf>,
}

fn run_cli(cli: &Cli) -> Result<RunSummary, LocalizerError> {
    let settings = Settings::new(&cli.rus_zip_folder, cli.dry_run, cli.steam_dir.as_deref())?;
    install::run(
        &settings,
        Some(|p: Progress| {
            println!(
                "Iterating over archived localizations [{}/{}]: {}",
                p.index + 1,
                p.total,
                p.archive.display()
            );
        }),
    )
}

fn main() {
    let cli = Cli::parse();

    if !cfg!(target_os = "macos") {
        eprintln!(
            "Error: this tool requires macOS (current platform: {})",
            std::env::consts::OS
        );
        process::exit(2);
    }

    let subscriber = logging::subscriber(logging::level_from_env());
    let result = tracing::subscriber::with_default(subscriber, || run_cli(&cli));

    match result {
        Ok(summary) => {
            if summary.has_failures() {
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    }
}
