//! spritecat: sprite catalog inspection tool.
//!
//! Small companion binary for working on sprite configuration documents
//! without booting the game:
//!
//! ```sh
//! spritecat validate assets/invaders.json
//! spritecat inspect assets/invaders.json
//! spritecat export assets/invaders.json crab_walk --frame 2 --out crab.png
//! ```
//!
//! Every subcommand performs a full catalog load (configuration parse,
//! static validation, sheet decode, geometry check), so a clean exit means
//! the game will accept the document as-is.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use invader_sprites::resources::catalog::SpriteCatalog;
use invader_sprites::surface::PixelSurface;

/// Inspect and validate sprite catalog configurations.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fully load a configuration, reporting the first problem found.
    Validate {
        /// Path to the sprite configuration JSON.
        config: PathBuf,
    },
    /// Load a configuration and print its sheets, sprites, and metadata.
    Inspect {
        /// Path to the sprite configuration JSON.
        config: PathBuf,
    },
    /// Render one frame of a sprite to a PNG file.
    Export {
        /// Path to the sprite configuration JSON.
        config: PathBuf,
        /// Name of the sprite to render.
        sprite: String,
        /// Frame index within the sprite's sequence.
        #[arg(long, default_value_t = 0)]
        frame: usize,
        /// Output file (default: <sprite>_<frame>.png).
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to create tokio runtime");

    match cli.command {
        Command::Validate { config } => validate(&runtime, &config),
        Command::Inspect { config } => inspect(&runtime, &config),
        Command::Export {
            config,
            sprite,
            frame,
            out,
        } => export(&runtime, &config, &sprite, frame, out),
    }
}

fn load_catalog(runtime: &tokio::runtime::Runtime, config: &PathBuf) -> Option<SpriteCatalog> {
    match runtime.block_on(SpriteCatalog::load(config)) {
        Ok(catalog) => Some(catalog),
        Err(e) => {
            eprintln!("Error: {e}");
            None
        }
    }
}

fn validate(runtime: &tokio::runtime::Runtime, config: &PathBuf) -> ExitCode {
    match load_catalog(runtime, config) {
        Some(catalog) => {
            let progress = catalog.load_progress();
            println!(
                "OK: {} sheets, {} sprites",
                progress.total,
                catalog.sprite_names().len()
            );
            ExitCode::SUCCESS
        }
        None => ExitCode::FAILURE,
    }
}

fn inspect(runtime: &tokio::runtime::Runtime, config: &PathBuf) -> ExitCode {
    let Some(catalog) = load_catalog(runtime, config) else {
        return ExitCode::FAILURE;
    };

    for (sheet_name, sprites) in catalog.sprites_by_category() {
        let Some(sheet) = catalog.spritesheet(&sheet_name) else {
            continue;
        };
        let (fw, fh) = sheet.frame_size();
        let (columns, rows) = sheet.grid().unwrap_or((0, 0));
        println!(
            "{sheet_name}: {} ({columns}x{rows} cells of {fw}x{fh})",
            sheet.path().display()
        );
        for name in sprites {
            if let Some(template) = catalog.template(&name) {
                println!(
                    "  {name}: {} frames @ {} fps{}",
                    template.frame_count(),
                    template.fps(),
                    if template.is_looped() { ", looped" } else { "" }
                );
            }
        }
    }

    let progress = catalog.load_progress();
    println!(
        "loaded {}/{} sheets ({:.0}%)",
        progress.loaded, progress.total, progress.percent
    );
    ExitCode::SUCCESS
}

fn export(
    runtime: &tokio::runtime::Runtime,
    config: &PathBuf,
    sprite: &str,
    frame: usize,
    out: Option<PathBuf>,
) -> ExitCode {
    let Some(catalog) = load_catalog(runtime, config) else {
        return ExitCode::FAILURE;
    };

    let Some(region) = catalog.template(sprite).and_then(|t| t.frame(frame)) else {
        eprintln!("Error: no sprite '{sprite}' with frame {frame}");
        return ExitCode::FAILURE;
    };

    let mut surface = PixelSurface::new(region.width, region.height);
    catalog.draw(&mut surface, sprite, frame, 0.0, 0.0, None, None);

    let out = out.unwrap_or_else(|| PathBuf::from(format!("{sprite}_{frame}.png")));
    match surface.into_image().save(&out) {
        Ok(()) => {
            println!("wrote {}", out.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: failed to write {}: {e}", out.display());
            ExitCode::FAILURE
        }
    }
}
