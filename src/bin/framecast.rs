use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use sha2::Digest as _;

#[derive(Parser, Debug)]
#[command(name = "framecast", version, about = "Render promo slide and TV short frames")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the 16 landscape deck frames (1920x1080 RGB).
    Deck(RunArgs),
    /// Render the 10 vertical short scenes (1080x1920 RGBA).
    Short(RunArgs),
    /// Print which font file each text role resolves to.
    Fonts(FontArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Output directory (overrides the config file).
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// JSON config file; missing fields keep the preset values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for effect randomness; omit for a different result each run.
    #[arg(long)]
    seed: Option<u64>,

    /// Log level for stderr diagnostics (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Args, Debug)]
struct FontArgs {
    /// JSON config file whose font candidates are resolved.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level for stderr diagnostics (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug)]
enum Preset {
    Deck,
    Short,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Deck(args) => cmd_run(Preset::Deck, args),
        Command::Short(args) => cmd_run(Preset::Short, args),
        Command::Fonts(args) => cmd_fonts(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(preset: Preset, path: Option<&PathBuf>) -> anyhow::Result<framecast::RenderConfig> {
    let base = match preset {
        Preset::Deck => framecast::RenderConfig::deck(),
        Preset::Short => framecast::RenderConfig::short(),
    };
    match path {
        Some(path) => base
            .with_overrides_from(path)
            .with_context(|| format!("load config '{}'", path.display())),
        None => Ok(base),
    }
}

fn cmd_run(preset: Preset, args: RunArgs) -> anyhow::Result<()> {
    init_tracing(args.verbose);

    let mut cfg = load_config(preset, args.config.as_ref())?;
    if let Some(dir) = args.out_dir {
        cfg.out_dir = dir;
    }
    if args.seed.is_some() {
        cfg.seed = args.seed;
    }

    let out_dir = cfg.out_dir.clone();
    let mut studio = framecast::Studio::new(cfg).context("prepare studio")?;
    let mut sink = framecast::PngDirSink::new(&out_dir);

    let report = match preset {
        Preset::Deck => {
            println!("Generating deck frames...");
            framecast::run_deck(&mut studio, &mut sink, |done| {
                println!("Generated frame {}: {}", done.index, done.label);
            })
        }
        Preset::Short => {
            println!("Generating short frames...");
            framecast::run_short(&mut studio, &mut sink, |done| {
                println!("Generated: {}", done.label);
            })
        }
    }
    .with_context(|| format!("render frames into '{}'", out_dir.display()))?;

    println!();
    println!("Generated {} unique frames", report.unique.len());
    println!(
        "Total frames for video: {} ({:.0}s)",
        report.expanded.len(),
        report.duration_secs()
    );
    println!("Output directory: {}", report.out_dir.display());
    Ok(())
}

fn cmd_fonts(args: FontArgs) -> anyhow::Result<()> {
    init_tracing(args.verbose);

    let cfg = load_config(Preset::Deck, args.config.as_ref())?;
    let fonts = framecast::FontSet::resolve(&cfg.fonts).context("resolve fonts")?;
    let mut ts = framecast::Typesetter::new(fonts.clone());

    println!("text font diagnostics:");
    for (role, face) in fonts.iter() {
        let source = match face.source() {
            framecast::FontSource::Preferred(path) => path.display().to_string(),
            framecast::FontSource::Fallback { family } => format!("fallback ({family})"),
        };
        let family = ts
            .family_name(role)
            .with_context(|| format!("register font for {role:?}"))?;
        println!("  {role:?}:");
        println!("    font_source: {source}");
        println!("    family:      {family}");
        println!("    sha256:      {}", sha256_hex(face.bytes()));
    }
    Ok(())
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{b:02x}"));
    }
    out
}
