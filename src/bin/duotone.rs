//! Command line front-end: list icon variants and render them to SVG or PNG.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{eyre, Result, WrapErr};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use duotone_ui::{Configurable, IconEngine, IconVariant, Opacity, ThemeProfile};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// How verbose the output should be, can be set up to 3 times. Has no effect if RUST_LOG is set
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every icon variant name
    List,

    /// Render one icon
    Render(RenderArgs),
}

#[derive(clap::Args, Debug)]
struct RenderArgs {
    /// Icon variant, e.g. `cloud-check`
    variant: IconVariant,

    /// Display width; height follows the viewbox ratio when omitted
    #[arg(long)]
    width: Option<f32>,

    /// Display height; width follows the viewbox ratio when omitted
    #[arg(long)]
    height: Option<f32>,

    /// Color token for the primary (outline) slot
    #[arg(long)]
    primary: Option<String>,

    /// Color token for the secondary (glyph) slot
    #[arg(long)]
    secondary: Option<String>,

    /// Two hex digit alpha for the primary slot
    #[arg(long)]
    primary_opacity: Option<Opacity>,

    /// Two hex digit alpha for the secondary slot
    #[arg(long)]
    secondary_opacity: Option<Opacity>,

    /// Theme profile (JSON) with colors and icon defaults
    #[arg(long)]
    theme: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Svg)]
    format: Format,

    /// Where to write the result; stdout when omitted (not allowed for PNG)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Svg,
    Png,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    tracing_init(&args)?;
    debug!(?args);

    match args.command {
        Command::List => {
            let mut stdout = io::stdout().lock();
            for variant in IconVariant::ALL {
                writeln!(stdout, "{variant}")?;
            }
        }
        Command::Render(render) => run_render(render)?,
    }

    Ok(())
}

fn tracing_init(args: &Args) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(
            match args.verbose {
                0 => "duotone_ui=info",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
            .parse()?,
        )
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    Ok(())
}

fn run_render(args: RenderArgs) -> Result<()> {
    let mut engine = IconEngine::default();
    if let Some(path) = &args.theme {
        let json = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read theme {}", path.display()))?;
        engine.apply_profile(&ThemeProfile::from_json(&json)?)?;
        info!("loaded theme from {}", path.display());
    }

    let mut request = engine.request(args.variant);
    request.width = args.width;
    request.height = args.height;
    if let Some(primary) = args.primary {
        request = request.with_primary(primary);
    }
    if let Some(secondary) = args.secondary {
        request = request.with_secondary(secondary);
    }
    if let Some(opacity) = args.primary_opacity {
        request = request.with_primary_opacity(opacity);
    }
    if let Some(opacity) = args.secondary_opacity {
        request = request.with_secondary_opacity(opacity);
    }

    let drawing = engine.render(&request)?;

    match (args.format, &args.output) {
        (Format::Png, None) => return Err(eyre!("PNG output needs --output")),
        (Format::Png, Some(path)) => {
            drawing
                .rasterize()?
                .save(path)
                .wrap_err_with(|| format!("failed to write {}", path.display()))?;
        }
        (Format::Svg, output) => write_text(output.as_ref(), &drawing.to_svg())?,
        (Format::Json, output) => {
            write_text(output.as_ref(), &serde_json::to_string_pretty(&drawing)?)?
        }
    }

    if let Some(path) = &args.output {
        info!("wrote {} to {}", drawing.variant, path.display());
    }
    Ok(())
}

fn write_text(output: Option<&PathBuf>, text: &str) -> Result<()> {
    match output {
        Some(path) => fs::write(path, text)
            .wrap_err_with(|| format!("failed to write {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{text}")?;
            Ok(())
        }
    }
}
