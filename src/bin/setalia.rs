use std::{
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "setalia", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simulate a scripted scroll over a page and write a per-frame JSON trace.
    Simulate(SimulateArgs),
    /// Print base and layer offsets for one panel geometry.
    Offsets(OffsetsArgs),
    /// Write the built-in page description as JSON.
    Preset(PresetArgs),
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Page description JSON (defaults to the built-in page).
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Viewport width in logical pixels.
    #[arg(long, default_value_t = 1440.0)]
    width: f64,

    /// Viewport height in logical pixels.
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Starting scroll offset.
    #[arg(long, default_value_t = 0.0)]
    from: f64,

    /// Final scroll offset.
    #[arg(long)]
    to: f64,

    /// Frames spent scrolling.
    #[arg(long, default_value_t = 60)]
    ramp_frames: u32,

    /// Idle frames after scrolling stops.
    #[arg(long, default_value_t = 60)]
    settle_frames: u32,

    /// Simulate the platform reduced-motion preference.
    #[arg(long)]
    reduced_motion: bool,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct OffsetsArgs {
    /// Panel top relative to the viewport top.
    #[arg(long, allow_hyphen_values = true)]
    top: f64,

    /// Panel height.
    #[arg(long)]
    panel_height: f64,

    /// Viewport height.
    #[arg(long, default_value_t = 900.0)]
    viewport_height: f64,

    /// Viewport width.
    #[arg(long, default_value_t = 1440.0)]
    width: f64,

    /// Use the form-section preset instead of the image-panel preset.
    #[arg(long)]
    form: bool,
}

#[derive(Parser, Debug)]
struct PresetArgs {
    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Simulate(args) => cmd_simulate(args),
        Command::Offsets(args) => cmd_offsets(args),
        Command::Preset(args) => cmd_preset(args),
    }
}

fn read_page_json(path: &Path) -> anyhow::Result<setalia::PageSpec> {
    let f = File::open(path).with_context(|| format!("open page '{}'", path.display()))?;
    let r = BufReader::new(f);
    let page: setalia::PageSpec =
        serde_json::from_reader(r).with_context(|| "parse page JSON")?;
    page.validate()?;
    Ok(page)
}

fn write_json<T: serde::Serialize>(out: Option<&Path>, value: &T) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(path)
                .with_context(|| format!("create '{}'", path.display()))?;
            let mut w = BufWriter::new(f);
            serde_json::to_writer_pretty(&mut w, value)
                .with_context(|| format!("write '{}'", path.display()))?;
            w.flush()?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut w = stdout.lock();
            serde_json::to_writer_pretty(&mut w, value)?;
            writeln!(w)?;
        }
    }
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let page = match &args.in_path {
        Some(p) => read_page_json(p)?,
        None => setalia::PageSpec::setalia(),
    };
    let viewport = setalia::Viewport::new(args.width, args.height)?;
    let mut session = setalia::PageSession::new(&page, viewport)?;
    session.set_reduced_motion(args.reduced_motion);

    let script = setalia::ScrollScript::ramp(
        args.from,
        args.to,
        args.ramp_frames,
        args.settle_frames,
    );
    let reports = script.run(&mut session)?;
    write_json(args.out.as_deref(), &reports)
}

#[derive(serde::Serialize)]
struct OffsetsReport {
    progress: Option<f64>,
    base: Option<f64>,
    is_narrow: bool,
    targets: Option<setalia::LayerTargets>,
}

fn cmd_offsets(args: OffsetsArgs) -> anyhow::Result<()> {
    let cfg = if args.form {
        setalia::EngineConfig::form_section()
    } else {
        setalia::EngineConfig::hero()
    };
    let sample = setalia::ScrollSample {
        rect_top: args.top,
        rect_height: args.panel_height,
        viewport_height: args.viewport_height,
    };
    let class = setalia::ViewportClass::classify(args.width, cfg.narrow_breakpoint);
    let progress = cfg.model.progress(sample);
    let base = progress.and_then(|p| setalia::base_offset(&cfg, p));
    let report = OffsetsReport {
        progress,
        base,
        is_narrow: class.is_narrow(),
        targets: base.map(|b| setalia::layer_targets(&cfg, b, class, false)),
    };
    write_json(None, &report)
}

fn cmd_preset(args: PresetArgs) -> anyhow::Result<()> {
    write_json(args.out.as_deref(), &setalia::PageSpec::setalia())
}
