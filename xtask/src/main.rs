use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::Command;

#[derive(Parser)]
#[command(name = "xtask", about = "Workspace automation for the world gallery")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run fmt, clippy, and tests
    Check,
    /// Run cargo fmt --check on all crates
    Fmt,
    /// Run clippy on all crates with warnings denied
    Clippy,
    /// Run all tests
    Test,
    /// Run the scene frame micro-benchmark
    Bench,
    /// Render every catalog world headlessly and print the frame digests
    Digests {
        /// Frames to animate per world
        #[arg(short, long, default_value = "60")]
        frames: u64,
    },
}

/// World ids in the built-in catalog.
const WORLD_IDS: std::ops::RangeInclusive<u32> = 1..=6;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check => {
            fmt()?;
            clippy()?;
            test()?;
        }
        Commands::Fmt => fmt()?,
        Commands::Clippy => clippy()?,
        Commands::Test => test()?,
        Commands::Bench => cargo(
            "scene frame benchmark",
            &["bench", "-p", "gallery-render", "--bench", "bench_scene_frame"],
        )?,
        Commands::Digests { frames } => {
            let frames = frames.to_string();
            for id in WORLD_IDS {
                let id = id.to_string();
                cargo(
                    &format!("world {id} digest"),
                    &[
                        "run", "-q", "-p", "gallery-cli", "--", "render", "--world", &id,
                        "--frames", &frames,
                    ],
                )?;
            }
        }
    }

    Ok(())
}

fn fmt() -> Result<()> {
    cargo("fmt check", &["fmt", "--all", "--", "--check"])
}

fn clippy() -> Result<()> {
    cargo(
        "clippy",
        &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
    )
}

fn test() -> Result<()> {
    cargo("tests", &["test", "--workspace"])
}

fn cargo(label: &str, args: &[&str]) -> Result<()> {
    println!("==> {label}: cargo {}", args.join(" "));
    let status = Command::new("cargo").args(args).status()?;
    if !status.success() {
        anyhow::bail!("{label} failed ({status})");
    }
    Ok(())
}
