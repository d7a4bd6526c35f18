use std::io::IsTerminal as _;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{ArgAction, Parser};
use slideshow::{
    DryRunEncoder, Encoder, FfmpegEncoder, FfprobeProber, SlideshowConfig, locate_tool,
};
use tracing_subscriber::EnvFilter;

/// Build a cross-faded slideshow video from a media directory and a soundtrack.
///
/// With no arguments, reads `./media`, loops `./music.mp3` and writes
/// `./output/slideshow.mp4` (requires `ffmpeg` on PATH).
#[derive(Parser, Debug)]
#[command(name = "slideshow", version)]
struct Cli {
    /// JSON configuration file; unset fields keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Media directory (overrides config).
    #[arg(long)]
    media: Option<PathBuf>,

    /// Soundtrack file (overrides config).
    #[arg(long)]
    music: Option<PathBuf>,

    /// Scratch directory for normalized segments (overrides config).
    #[arg(long)]
    scratch: Option<PathBuf>,

    /// Output directory (overrides config).
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Output file name inside the output directory (overrides config).
    #[arg(long)]
    out_file: Option<String>,

    /// Plan everything and print the ffmpeg commands without running them.
    #[arg(long, default_value_t = false)]
    dry_run: bool,

    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cfg = load_config(&cli)?;
    slideshow::preflight(&cfg)?;

    let prober = match locate_tool("ffprobe", cfg.ffprobe.as_deref()) {
        Ok(bin) => FfprobeProber::new(bin),
        Err(e) => {
            tracing::warn!(error = %e, "clip durations will fall back to the cut duration");
            FfprobeProber::default()
        }
    };

    let mut encoder: Box<dyn Encoder> = if cli.dry_run {
        let bin = cfg.ffmpeg.clone().unwrap_or_else(|| PathBuf::from("ffmpeg"));
        Box::new(DryRunEncoder::new(bin))
    } else {
        let bin = locate_tool("ffmpeg", cfg.ffmpeg.as_deref())
            .context("ffmpeg is required to encode the slideshow")?;
        Box::new(FfmpegEncoder::new(bin))
    };

    let report = slideshow::run(&cfg, &prober, encoder.as_mut())
        .context("error rendering slideshow")?;

    for path in &report.failed {
        eprintln!("skipped {}", path.display());
    }
    if cli.dry_run {
        eprintln!("dry run: would write {}", report.output.display());
    } else {
        eprintln!("wrote {}", report.output.display());
    }
    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<SlideshowConfig> {
    let mut cfg = match &cli.config {
        Some(path) => SlideshowConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => SlideshowConfig::default(),
    };
    if let Some(dir) = &cli.media {
        cfg.media_dir = dir.clone();
    }
    if let Some(file) = &cli.music {
        cfg.music_file = file.clone();
    }
    if let Some(dir) = &cli.scratch {
        cfg.scratch_dir = dir.clone();
    }
    if let Some(dir) = &cli.out_dir {
        cfg.output_dir = dir.clone();
    }
    if let Some(name) = &cli.out_file {
        cfg.output_file = name.clone();
    }
    Ok(cfg)
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}
