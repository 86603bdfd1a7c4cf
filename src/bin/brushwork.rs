use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use sha2::Digest as _;
use tracing_subscriber::filter::LevelFilter;

use brushwork::{
    FontBook, ImageConfig, ImageOutcome, PagePreset, Palette, RenderThreading, WrittenImage,
};

#[derive(Parser, Debug)]
#[command(name = "brushwork", version, about = "Paint deterministic 1200x630 social-card PNGs")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,

    /// More log output on stderr (repeat for more).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Extra directory to load fonts from (repeatable).
    #[arg(long = "font-dir", global = true)]
    font_dirs: Vec<PathBuf>,

    /// Print the frame fingerprint and PNG SHA-256 of every written image.
    #[arg(long, global = true)]
    digest: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Paint a single image from flags.
    Render(RenderArgs),
    /// Paint every image listed in a JSON batch file.
    Batch(BatchArgs),
    /// Paint the built-in site pages.
    Presets(PresetArgs),
    /// List the built-in palettes.
    Palettes,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Title text.
    #[arg(long)]
    title: String,

    /// Optional subtitle under the title.
    #[arg(long)]
    subtitle: Option<String>,

    /// Palette name; unknown names fall back to `brand`.
    #[arg(long, default_value = "brand")]
    palette: String,

    /// Stream seed; negative values are accepted.
    #[arg(
        long,
        allow_negative_numbers = true,
        default_value_t = brushwork::config::model::DEFAULT_SEED
    )]
    seed: i64,

    /// Number of gestural strokes.
    #[arg(long, default_value_t = brushwork::config::model::DEFAULT_DENSITY)]
    density: u32,

    /// Number of large background swaths.
    #[arg(long, default_value_t = brushwork::config::model::DEFAULT_SWATH_COUNT)]
    swaths: u32,

    #[arg(long, value_enum, default_value_t = DirectionChoice::Mixed)]
    direction: DirectionChoice,

    #[arg(long, default_value_t = brushwork::config::model::DEFAULT_TITLE_SIZE)]
    title_size: u32,

    #[arg(long, value_enum, default_value_t = PositionChoice::Top)]
    position: PositionChoice,

    /// Draw offset cobalt/accent copies beneath the title.
    #[arg(long)]
    chromatic: bool,

    /// Line pattern in the lower right.
    #[arg(long, value_enum)]
    pattern: Option<PatternChoice>,

    /// Hairline grid over the canvas.
    #[arg(long)]
    grid: bool,

    /// Accent-colored bar along the top edge.
    #[arg(long)]
    accent_bar: bool,

    /// Accent color override as `#RRGGBB`.
    #[arg(long)]
    accent: Option<String>,

    /// Output PNG path.
    #[arg(long, default_value = brushwork::config::model::DEFAULT_OUTPUT_PATH)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct ThreadingArgs {
    /// Paint images concurrently.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,
}

impl ThreadingArgs {
    fn threading(&self) -> RenderThreading {
        RenderThreading {
            parallel: self.parallel,
            threads: self.threads,
        }
    }
}

#[derive(Parser, Debug)]
struct BatchArgs {
    /// Batch JSON file.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Directory that relative `outputPath` values are resolved against.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    #[command(flatten)]
    threading: ThreadingArgs,
}

#[derive(Parser, Debug)]
struct PresetArgs {
    /// Output directory.
    #[arg(long, default_value = "images")]
    out_dir: PathBuf,

    /// Only paint these pages (by key, repeatable).
    #[arg(long = "only")]
    only: Vec<String>,

    #[command(flatten)]
    threading: ThreadingArgs,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DirectionChoice {
    Horizontal,
    Vertical,
    Mixed,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PatternChoice {
    Circles,
    Spiral,
    Waves,
    Geometric,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PositionChoice {
    Top,
    Bottom,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match &cli.cmd {
        Command::Render(args) => cmd_render(&cli, args),
        Command::Batch(args) => cmd_batch(&cli, args),
        Command::Presets(args) => cmd_presets(&cli, args),
        Command::Palettes => cmd_palettes(),
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        LevelFilter::ERROR
    } else {
        match verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn font_book(cli: &Cli) -> FontBook {
    FontBook::with_dirs(&cli.font_dirs)
}

fn cmd_render(cli: &Cli, args: &RenderArgs) -> anyhow::Result<()> {
    let config = ImageConfig {
        title: args.title.clone(),
        subtitle: args.subtitle.clone(),
        palette_name: args.palette.clone(),
        seed: args.seed,
        density: args.density,
        swath_count: args.swaths,
        direction: match args.direction {
            DirectionChoice::Horizontal => brushwork::Direction::Horizontal,
            DirectionChoice::Vertical => brushwork::Direction::Vertical,
            DirectionChoice::Mixed => brushwork::Direction::Mixed,
        },
        title_size: args.title_size,
        text_position: match args.position {
            PositionChoice::Top => brushwork::TextPosition::Top,
            PositionChoice::Bottom => brushwork::TextPosition::Bottom,
        },
        output_path: args.out.clone(),
        chromatic_title: args.chromatic,
        pattern: args.pattern.map(|p| match p {
            PatternChoice::Circles => brushwork::Pattern::Circles,
            PatternChoice::Spiral => brushwork::Pattern::Spiral,
            PatternChoice::Waves => brushwork::Pattern::Waves,
            PatternChoice::Geometric => brushwork::Pattern::Geometric,
        }),
        grid: args.grid,
        accent_bar: args.accent_bar,
        accent_color: args.accent.clone(),
    };

    let written = brushwork::generate_to_file(&config, &font_book(cli))
        .with_context(|| format!("render '{}'", config.output_path.display()))?;
    report_written(cli, &written)?;
    Ok(())
}

fn cmd_batch(cli: &Cli, args: &BatchArgs) -> anyhow::Result<()> {
    let mut configs = brushwork::load_batch(&args.in_path)
        .with_context(|| format!("load batch '{}'", args.in_path.display()))?;
    if let Some(dir) = &args.out_dir {
        brushwork::rebase_outputs(&mut configs, dir);
    }
    run_batch(cli, &configs, &args.threading)
}

fn cmd_presets(cli: &Cli, args: &PresetArgs) -> anyhow::Result<()> {
    let configs = if args.only.is_empty() {
        brushwork::site_pages(&args.out_dir)
    } else {
        args.only
            .iter()
            .map(|key| {
                PagePreset::find(key)
                    .map(|p| p.to_config(&args.out_dir))
                    .with_context(|| {
                        let known: Vec<_> = brushwork::PAGES.iter().map(|p| p.key).collect();
                        format!("unknown page '{key}' (known: {})", known.join(", "))
                    })
            })
            .collect::<anyhow::Result<Vec<_>>>()?
    };
    run_batch(cli, &configs, &args.threading)
}

fn cmd_palettes() -> anyhow::Result<()> {
    for name in brushwork::PaletteName::ALL {
        let p = Palette::get(name);
        println!(
            "{:<10} #{} {}",
            name.as_str(),
            p.background.to_hex(),
            if p.is_dark() { "dark" } else { "light" }
        );
    }
    Ok(())
}

fn run_batch(cli: &Cli, configs: &[ImageConfig], threading: &ThreadingArgs) -> anyhow::Result<()> {
    let outcomes = brushwork::generate_batch(configs, &font_book(cli), &threading.threading())?;

    let mut failed = 0usize;
    for ImageOutcome {
        index,
        output_path,
        result,
    } in &outcomes
    {
        match result {
            Ok(written) => report_written(cli, written)?,
            Err(err) => {
                failed += 1;
                eprintln!("failed [{index}] {}: {err}", output_path.display());
            }
        }
    }

    eprintln!(
        "{} written, {failed} failed",
        outcomes.len().saturating_sub(failed)
    );
    if failed > 0 {
        anyhow::bail!("{failed} of {} images failed", outcomes.len());
    }
    Ok(())
}

fn report_written(cli: &Cli, written: &WrittenImage) -> anyhow::Result<()> {
    eprintln!("wrote {}", written.path.display());
    if cli.digest {
        let sha = sha256_file(&written.path)?;
        println!("{}  {sha}  {}", written.fingerprint, written.path.display());
    }
    Ok(())
}

fn sha256_file(path: &Path) -> anyhow::Result<String> {
    let bytes = std::fs::read(path).with_context(|| format!("read '{}'", path.display()))?;
    Ok(sha256_hex(&bytes))
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
