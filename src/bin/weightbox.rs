use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use weightbox::{BoxDocument, CpuSurface, Rgba8, render};

#[derive(Parser, Debug)]
#[command(name = "weightbox", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lay out a document and print child rectangles as JSON.
    Layout(LayoutArgs),
    /// Lay out a document and render its decorations to a PNG.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Input layout document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Write JSON here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input layout document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Clear color (`#RRGGBB` or `#AARRGGBB`); defaults to the container background, or
    /// transparent when none is set.
    #[arg(long)]
    clear: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn load(path: &Path) -> anyhow::Result<BoxDocument> {
    BoxDocument::from_path(path).with_context(|| format!("load document '{}'", path.display()))
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let doc = load(&args.in_path)?;
    let laid_out = doc.layout().context("lay out document")?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&laid_out)
    } else {
        serde_json::to_string(&laid_out)
    }
    .context("serialize layout")?;

    match args.out {
        Some(out) => {
            ensure_parent_dir(&out)?;
            std::fs::write(&out, json).with_context(|| format!("write '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let doc = load(&args.in_path)?;
    let laid_out = doc.layout().context("lay out document")?;

    let clear = match args.clear.as_deref() {
        Some(s) => Rgba8::parse_hex(s).context("parse --clear")?,
        None => doc.container.background.unwrap_or(Rgba8::TRANSPARENT),
    };

    let mut surface = CpuSurface::for_size(laid_out.size).context("allocate surface")?;
    if clear.a > 0 {
        surface.clear(clear);
    }
    render(&mut surface, &doc.container, &laid_out.rects()).context("draw decorations")?;
    let mut frame = surface.finish();
    if frame.premultiplied {
        unpremultiply_in_place(&mut frame.data);
    }

    ensure_parent_dir(&args.out)?;
    image::save_buffer_with_format(
        &args.out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn unpremultiply_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}
