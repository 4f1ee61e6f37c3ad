use anyhow::Context;
use clap::{Parser, Subcommand};
use gallery_catalog::{Catalog, WorldId, format_population};
use gallery_clock::FrameQueue;
use gallery_common::Size;
use gallery_render::{RecordingSurface, SceneHost, SceneRenderer, render_frame};
use gallery_render_raster::PixelSurface;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gallery-cli", about = "CLI tool for the world gallery")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// List the worlds in the catalog
    List {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Animate a world headlessly and print the final frame's digest
    Render {
        /// World id
        #[arg(short, long)]
        world: u32,
        /// Number of frames to draw, including frame 0
        #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u64).range(1..))]
        frames: u64,
        /// Displayed width of the scene
        #[arg(long, default_value = "800")]
        width: f64,
        /// Displayed height of the scene
        #[arg(long, default_value = "500")]
        height: f64,
        /// Write the final frame as a PNG image
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Dump the draw calls issued for one frame
    Commands {
        /// World id
        #[arg(short, long)]
        world: u32,
        /// Frame counter value to draw
        #[arg(short, long, default_value = "0")]
        frame: u64,
        /// Displayed width of the scene
        #[arg(long, default_value = "800")]
        width: f64,
        /// Displayed height of the scene
        #[arg(long, default_value = "500")]
        height: f64,
        /// Emit JSON instead of one line per call
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::debug!("gallery-cli starting");

    let catalog = Catalog::builtin();

    match cli.command {
        Commands::Info => {
            println!("gallery-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("catalog: {} ({} worlds)", gallery_catalog::crate_info(), catalog.len());
            println!("clock: {}", gallery_clock::crate_info());
            println!("input: {}", gallery_input::crate_info());
            println!("render: {}", gallery_render::crate_info());
            println!("raster: {}", gallery_render_raster::crate_info());
        }
        Commands::List { json } => {
            if json {
                let worlds: Vec<_> = catalog.iter().collect();
                println!("{}", serde_json::to_string_pretty(&worlds)?);
            } else {
                for w in catalog.iter() {
                    println!(
                        "{:>2}  {} {:<14} {:<9} pop {:>13}  {}",
                        w.id.0,
                        w.icon,
                        w.name,
                        w.biome.name(),
                        format_population(w.inhabitants),
                        w.description
                    );
                }
            }
        }
        Commands::Render {
            world,
            frames,
            width,
            height,
            out,
        } => {
            let record = *catalog.require(WorldId(world))?;
            let surface = PixelSurface::new(Size::new(width, height))?;

            let mut host = SceneHost::new(FrameQueue::new());
            host.bind(record, Some(surface));
            for _ in 1..frames {
                host.tick();
            }

            let last = host.frame().map_or(0, |f| f.saturating_sub(1));
            let surface = host
                .unbind()
                .context("scene host released no surface after rendering")?;
            let avg = host.frame_timer().average();
            println!(
                "{} ({}): frame {last}, {}x{} px, avg draw {:.3} ms",
                record.name,
                record.biome,
                surface.width(),
                surface.height(),
                avg.as_secs_f64() * 1e3
            );
            println!("digest: {}", surface.digest());

            if let Some(path) = out {
                let file = File::create(&path)
                    .with_context(|| format!("creating {}", path.display()))?;
                surface.write_png(BufWriter::new(file))?;
                println!("wrote {}", path.display());
            }
        }
        Commands::Commands {
            world,
            frame,
            width,
            height,
            json,
        } => {
            let record = catalog.require(WorldId(world))?;
            let mut surface = RecordingSurface::new(Size::new(width, height));
            SceneRenderer::attach(&mut surface);
            render_frame(record.biome, frame, &mut surface);

            let commands = surface.take_commands();
            if json {
                println!("{}", serde_json::to_string_pretty(&commands)?);
            } else {
                println!("{} frame {frame}: {} draw calls", record.name, commands.len());
                for cmd in &commands {
                    println!("  {}", cmd.kind());
                }
            }
        }
    }

    Ok(())
}
