//! umap-config - headless front end for the BlenderUmap exporter settings
//!
//! # Overview
//!
//! Inside the host application the settings live in the scene and the UI panels call
//! into the library directly. This binary plays the host's part from the command line,
//! keeping the scene settings in a YAML file:
//!
//! - `export`: snapshot the scene and write `<ExportPath>/config.json`
//! - `import`: read `config.json` back into the scene and save the scene file
//! - `show`: print the document `export` would write
//!
//! # Execution Flow
//!
//! 1. Parse arguments, initialize logging → `<log-dir>/umap-config.<date>`
//! 2. Load the scene file (defaults if it doesn't exist)
//! 3. Run the command against the scene
//! 4. Save the scene file if the command changed it

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use umap_config::logging::{LogSettings, setup_logging};
use umap_config::{APP_NAME, Config, SceneStore, VERSION};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Directory for log files
    #[arg(long, global = true, default_value = "logs")]
    log_dir: Utf8PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write config.json from the scene settings
    Export {
        /// Scene settings file (YAML)
        #[arg(short, long)]
        scene: Utf8PathBuf,

        /// Directory to write config.json into, instead of the scene's export path
        #[arg(short, long)]
        dir: Option<Utf8PathBuf>,
    },

    /// Load config.json into the scene settings
    Import {
        /// Scene settings file (YAML)
        #[arg(short, long)]
        scene: Utf8PathBuf,

        /// Directory to read config.json from, instead of the scene's export path
        #[arg(short, long)]
        dir: Option<Utf8PathBuf>,
    },

    /// Print the config.json the scene would export
    Show {
        /// Scene settings file (YAML)
        #[arg(short, long)]
        scene: Utf8PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut log_settings = LogSettings::new(args.log_dir.clone(), APP_NAME);
    log_settings.debug = args.debug;
    log_settings.console = true;
    let _guard = setup_logging(&log_settings)?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    match args.command {
        Command::Export { scene, dir } => {
            let store = SceneStore::new(&scene)?;
            let state = store.load()?;
            let config = Config::snapshot(&state);

            let target = dir.unwrap_or_else(|| config.export_path().to_path_buf());
            let path = config
                .dump(&state, &target)
                .with_context(|| format!("Failed to export config into {}", target))?;
            println!("{}", path);
        }
        Command::Import { scene, dir } => {
            let store = SceneStore::new(&scene)?;
            let mut state = store.load()?;
            let config = Config::snapshot(&state);

            let source = dir.unwrap_or_else(|| config.export_path().to_path_buf());
            let loaded = config
                .load_from(&mut state, &source)
                .with_context(|| format!("Failed to import config from {}", source))?;

            if loaded {
                store.save(&state)?;
            } else {
                tracing::warn!("No {} in {}, scene left unchanged", umap_config::CONFIG_FILE_NAME, source);
            }
        }
        Command::Show { scene } => {
            let state = SceneStore::new(&scene)?.load()?;
            let json = Config::snapshot(&state).to_json(&state)?;
            println!("{}", json);
        }
    }

    tracing::info!("Done");
    Ok(())
}
