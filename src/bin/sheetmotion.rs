use std::{io::Write as _, path::PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use sheetmotion::{Edge, Rect, SheetConfig, SheetVisuals, Trace, Viewport, compute_translation};

#[derive(Parser, Debug)]
#[command(name = "sheetmotion", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a gesture trace and write the sampled frames as JSON.
    Replay(ReplayArgs),
    /// Print the screen-out translation for one edge and progress.
    Edge(EdgeArgs),
    /// Print the sheet's visual parameters for one progress value.
    Visuals(VisualsArgs),
}

#[derive(Parser, Debug)]
struct ReplayArgs {
    /// Input trace JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Optional sheet config JSON; defaults apply otherwise.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output path; frames go to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct EdgeArgs {
    /// top, bottom, leading or trailing.
    #[arg(long)]
    edge: Edge,

    /// Transition progress; 0 is in place, 1 fully off-screen.
    #[arg(long)]
    progress: f64,

    /// Screen size as WIDTHxHEIGHT.
    #[arg(long, default_value = "390x844", value_parser = parse_viewport)]
    viewport: Viewport,

    /// Measured content bounds as x0,y0,x1,y1 (zero rect when omitted).
    #[arg(long, value_parser = parse_rect)]
    content: Option<Rect>,
}

#[derive(Parser, Debug)]
struct VisualsArgs {
    #[arg(long)]
    progress: f64,

    /// Optional sheet config JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn parse_viewport(s: &str) -> Result<Viewport, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let w: f64 = w.trim().parse().map_err(|e| format!("width: {e}"))?;
    let h: f64 = h.trim().parse().map_err(|e| format!("height: {e}"))?;
    Viewport::new(w, h).map_err(|e| e.to_string())
}

fn parse_rect(s: &str) -> Result<Rect, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f64>().map_err(|e| format!("'{p}': {e}")))
        .collect::<Result<Vec<_>, _>>()?;
    match parts.as_slice() {
        [x0, y0, x1, y1] => Ok(Rect::new(*x0, *y0, *x1, *y1)),
        _ => Err(format!("expected x0,y0,x1,y1, got '{s}'")),
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<SheetConfig> {
    match path {
        Some(p) => SheetConfig::from_path(p)
            .with_context(|| format!("load sheet config '{}'", p.display())),
        None => Ok(SheetConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Replay(args) => cmd_replay(args),
        Command::Edge(args) => cmd_edge(args),
        Command::Visuals(args) => cmd_visuals(args),
    }
}

fn cmd_replay(args: ReplayArgs) -> anyhow::Result<()> {
    let trace = Trace::from_path(&args.in_path)
        .with_context(|| format!("load trace '{}'", args.in_path.display()))?;
    let config = load_config(args.config.as_ref())?;
    let frames = sheetmotion::replay(&trace, config)?;

    let json = if args.pretty {
        serde_json::to_vec_pretty(&frames)?
    } else {
        serde_json::to_vec(&frames)?
    };

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(out, &json).with_context(|| format!("write '{}'", out.display()))?;
            eprintln!("wrote {} frames to {}", frames.len(), out.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&json)?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}

fn cmd_edge(args: EdgeArgs) -> anyhow::Result<()> {
    let content = args.content.unwrap_or(Rect::ZERO);
    let v = compute_translation(args.edge, args.progress, args.viewport.bounds, content);
    println!("{}", serde_json::json!({ "dx": v.x, "dy": v.y }));
    Ok(())
}

fn cmd_visuals(args: VisualsArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_ref())?;
    let visuals = SheetVisuals::from_progress(args.progress, &config.visuals);
    println!("{}", serde_json::to_string_pretty(&visuals)?);
    Ok(())
}
