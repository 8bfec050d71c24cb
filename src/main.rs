use clap::{Parser, Subcommand};
use photo_archive::library::SourceMode;
use photo_archive::library::photos_app::PhotosApp;
use photo_archive::library::snapshot::Snapshot;
use photo_archive::{config, output, pipeline};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "photo-archive")]
#[command(about = "List camera photos in a Photos library with their archive paths")]
#[command(long_about = "\
List camera photos in a Photos library with their archive paths

Queries the Photos app (or a saved library snapshot), keeps the photos named
by the cameras themselves (DSCF####.JPG, R#######.JPG), and prints them as
JSON on stdout:

  [
    {
      \"id\": \"8F1C…/L0/001\",
      \"date\": \"2023-04-05T00:00:00Z\",
      \"favorite\": true,
      \"original-filename\": \"DSCF0001.JPG\",
      \"archive-path\": \"2023/2023-04/2023-04-05/20230405-DSCF0001.JPG\"
    }
  ]

Without --all or --favorites, the collection comes from [source] default in
photo-archive.toml (\"all\" unless configured otherwise).

Run 'photo-archive gen-config' to generate a documented config file.")]
#[command(version)]
struct Cli {
    /// List every item in the library
    #[arg(long, conflicts_with = "favorites")]
    all: bool,

    /// List only the favorites album
    #[arg(long)]
    favorites: bool,

    /// Read items from a JSON library snapshot instead of the Photos app
    #[arg(long, value_name = "PATH")]
    library: Option<PathBuf>,

    /// Config file (default: ./photo-archive.toml if present)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print a summary to stderr after the listing
    #[arg(long)]
    summary: bool,

    /// Log debug diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    fn mode_flag(&self) -> Option<SourceMode> {
        if self.all {
            Some(SourceMode::All)
        } else if self.favorites {
            Some(SourceMode::Favorites)
        } else {
            None
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Print a stock photo-archive.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Some(Command::GenConfig) = cli.command {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    let cwd = std::env::current_dir()?;
    let config = config::load_config(cli.config.as_deref(), &cwd)?;
    let mode = config.resolve_mode(cli.mode_flag());

    let listing = match &cli.library {
        Some(path) => {
            let snapshot = Snapshot::new(path);
            tracing::debug!(path = %snapshot.path().display(), "using library snapshot");
            pipeline::list_photos(&snapshot, mode, &config)?
        }
        None => {
            tracing::debug!(program = %config.library.osascript, "using Photos app");
            let app = PhotosApp::new(config.library.osascript.as_str());
            pipeline::list_photos(&app, mode, &config)?
        }
    };

    output::print_records(&listing.records)?;
    if cli.summary {
        output::print_summary(&listing);
    }

    Ok(())
}

/// Diagnostics go to stderr; stdout carries only the listing.
///
/// `RUST_LOG` wins when set; otherwise warnings only, or debug with `--verbose`.
fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        "photo_archive=debug"
    } else {
        "photo_archive=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}
