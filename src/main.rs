use clap::{Parser, Subcommand};
use site_collections::{CollectionRegistry, config, output};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "site-collections")]
#[command(about = "Discover the documents of a site's collections")]
#[command(long_about = "\
Discover the documents of a site's collections

Each configured collection name maps to an underscore directory in the
source root. Names are reduced to ASCII letters and digits first, so a
name can never point outside the source root.

Source structure:

  source/
  ├── config.toml              # safe = ..., collections = [\"methods\"]
  └── _methods/                # Collection \"methods\"
      ├── configuration.md     # Document _methods/configuration.md
      ├── site/
      │   └── generate.md      # Document _methods/site/generate.md
      └── um_hi.md -> ...      # Symlink: skipped in safe mode

Run 'site-collections gen-config' to print a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Site source root
    #[arg(long, default_value = ".", global = true)]
    source: PathBuf,

    /// Directory for intermediate files (collections manifest)
    #[arg(long, default_value = ".site-collections-temp", global = true)]
    temp_dir: PathBuf,

    /// Force safe mode on, whatever config.toml says
    #[arg(long, global = true)]
    safe: bool,

    /// Debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Discover collections and write a JSON manifest
    Scan,
    /// Discover collections and report them without writing anything
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Command::Scan => {
            let (registry, safe) = build_registry(&cli.source, cli.safe)?;
            std::fs::create_dir_all(&cli.temp_dir)?;
            let manifest_path = cli.temp_dir.join("collections.json");
            let json = serde_json::to_string_pretty(&registry)?;
            std::fs::write(&manifest_path, json)?;
            output::print_registry(&registry, safe);
            tracing::info!(manifest = %manifest_path.display(), "wrote manifest");
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let (registry, safe) = build_registry(&cli.source, cli.safe)?;
            output::print_registry(&registry, safe);
            println!("==> Collections are valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load config from the source root and build the registry.
///
/// Returns the effective safe-mode flag alongside the registry.
fn build_registry(
    source: &std::path::Path,
    force_safe: bool,
) -> Result<(CollectionRegistry, bool), Box<dyn std::error::Error>> {
    let site_config = config::load_config(source)?;
    let safe = force_safe || site_config.safe;
    let registry = CollectionRegistry::build(&site_config.collections, source, safe)?;
    Ok((registry, safe))
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` means debug, `--quiet`
/// means warn, and the default is info.
fn init_logging(verbose: bool, quiet: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if quiet {
        EnvFilter::new("warn")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
