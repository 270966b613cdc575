use std::path::PathBuf;

use clap::{Parser, Subcommand};
use flipdot::{
    BitLinesSink, Cell, Clip, FrameIndex, FrameRange, Grid, PixelBuffer, PngSequenceSink,
    RenderOpts, Show,
};

#[derive(Parser, Debug)]
#[command(name = "flipdot", version)]
struct Cli {
    /// Log progress to stderr.
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame of a show as a PNG preview.
    Frame(FrameArgs),
    /// Render a show to a directory of numbered PNG previews.
    Render(RenderArgs),
    /// Print the wire bit strings of a show.
    Bits(BitsArgs),
    /// Rasterize one shape and print it as ASCII art.
    Draw(DrawArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input show JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Override the pixels per dot from the show's preview style.
    #[arg(long)]
    scale: Option<u32>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input show JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output directory for `frame_NNNNN.png` files.
    #[arg(long)]
    out: PathBuf,

    /// Only write frames that differ from the previously written one.
    #[arg(long, default_value_t = false)]
    skip_unchanged: bool,

    /// First frame to write.
    #[arg(long)]
    start: Option<u64>,

    /// Frame to stop before.
    #[arg(long)]
    end: Option<u64>,
}

#[derive(Parser, Debug)]
struct BitsArgs {
    /// Input show JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Print only this frame. Without it every frame is printed as
    /// `<index> <bits>`.
    #[arg(long)]
    frame: Option<u64>,

    /// Skip frames identical to the previous one (all-frames mode only).
    #[arg(long, default_value_t = false)]
    skip_unchanged: bool,
}

#[derive(Parser, Debug)]
struct DrawArgs {
    #[command(subcommand)]
    shape: Shape,

    /// Grid width in cells.
    #[arg(long, global = true, default_value_t = Grid::LARGE.width)]
    width: u32,

    /// Grid height in cells.
    #[arg(long, global = true, default_value_t = Grid::LARGE.height)]
    height: u32,

    /// Print cell indices instead of ASCII art. Off-grid indices are kept.
    #[arg(long, global = true, default_value_t = false)]
    indices: bool,
}

#[derive(Subcommand, Debug)]
enum Shape {
    /// Bresenham line between two cells.
    Line {
        #[arg(allow_hyphen_values = true)]
        x0: i32,
        #[arg(allow_hyphen_values = true)]
        y0: i32,
        #[arg(allow_hyphen_values = true)]
        x1: i32,
        #[arg(allow_hyphen_values = true)]
        y1: i32,
    },
    /// Ellipse outline around a centre with x/y radii.
    Ellipse {
        #[arg(allow_hyphen_values = true)]
        cx: i32,
        #[arg(allow_hyphen_values = true)]
        cy: i32,
        rx: u32,
        ry: u32,
    },
    /// Line with an arrowhead at the second cell.
    Arrow {
        #[arg(allow_hyphen_values = true)]
        x0: i32,
        #[arg(allow_hyphen_values = true)]
        y0: i32,
        #[arg(allow_hyphen_values = true)]
        x1: i32,
        #[arg(allow_hyphen_values = true)]
        y1: i32,
    },
    /// Axis-aligned rectangle between two corners.
    Rect {
        #[arg(allow_hyphen_values = true)]
        x0: i32,
        #[arg(allow_hyphen_values = true)]
        y0: i32,
        #[arg(allow_hyphen_values = true)]
        x1: i32,
        #[arg(allow_hyphen_values = true)]
        y1: i32,
        /// Fill the rectangle instead of outlining it.
        #[arg(long, default_value_t = false)]
        filled: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
        Command::Bits(args) => cmd_bits(args),
        Command::Draw(args) => cmd_draw(args),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let show = Show::from_path(&args.in_path)?;
    let frame = flipdot::render_frame_at(&show, FrameIndex(args.frame))?;

    let mut style = show.preview.clone();
    if let Some(scale) = args.scale {
        style.scale = scale;
        style.gap = style.gap.min(scale.saturating_sub(1));
    }
    let rgba = flipdot::render_preview(&frame, &style)?;
    flipdot::save_png(&rgba, &args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let show = Show::from_path(&args.in_path)?;
    let range = match (args.start, args.end) {
        (None, None) => None,
        (start, end) => Some(FrameRange::new(
            FrameIndex(start.unwrap_or(0)),
            FrameIndex(end.unwrap_or(show.duration)),
        )?),
    };

    let mut sink = PngSequenceSink::new(&args.out, show.preview.clone());
    let opts = RenderOpts {
        skip_unchanged: args.skip_unchanged,
        range,
    };
    let stats = flipdot::render_show(&show, &mut sink, &opts)?;

    eprintln!(
        "wrote {} of {} frames to {}",
        stats.frames_pushed,
        stats.frames_total,
        args.out.display()
    );
    Ok(())
}

fn cmd_bits(args: BitsArgs) -> anyhow::Result<()> {
    let show = Show::from_path(&args.in_path)?;
    match args.frame {
        Some(frame) => {
            let frame = flipdot::render_frame_at(&show, FrameIndex(frame))?;
            println!("{}", frame.to_bits());
        }
        None => {
            let mut sink = BitLinesSink::new(std::io::BufWriter::new(std::io::stdout()));
            let opts = RenderOpts {
                skip_unchanged: args.skip_unchanged,
                range: None,
            };
            flipdot::render_show(&show, &mut sink, &opts)?;
        }
    }
    Ok(())
}

fn cmd_draw(args: DrawArgs) -> anyhow::Result<()> {
    let grid = Grid::new(args.width, args.height)?;
    // Index output keeps off-grid cells.
    let clip = if args.indices { Clip::None } else { Clip::Bounds };

    let indices = match args.shape {
        Shape::Line { x0, y0, x1, y1 } => {
            flipdot::bresenham_line(grid, Cell::new(x0, y0), Cell::new(x1, y1), clip)
        }
        Shape::Ellipse { cx, cy, rx, ry } => flipdot::ellipse(grid, Cell::new(cx, cy), rx, ry, clip),
        Shape::Arrow { x0, y0, x1, y1 } => {
            flipdot::arrow(grid, Cell::new(x0, y0), Cell::new(x1, y1), clip)
        }
        Shape::Rect {
            x0,
            y0,
            x1,
            y1,
            filled,
        } => {
            let (a, b) = (Cell::new(x0, y0), Cell::new(x1, y1));
            if filled {
                flipdot::filled_rectangle(grid, a, b, clip)
            } else {
                flipdot::rectangle(grid, a, b, clip)
            }
        }
    };
    tracing::debug!(cells = indices.len(), "shape rasterized");

    if args.indices {
        let line: Vec<String> = indices.iter().map(i64::to_string).collect();
        println!("{}", line.join(" "));
    } else {
        let mut frame = PixelBuffer::new(grid);
        frame.apply(&indices, true);
        print!("{}", frame.to_ascii());
    }
    Ok(())
}
