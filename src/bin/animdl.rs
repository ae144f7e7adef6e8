use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "animdl", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render every frame of a script into the animation directory.
    Render(RenderArgs),
    /// Print the resolved base name, frame count and knob table as JSON.
    Knobs(KnobsArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input script JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Directory receiving the numbered frames.
    #[arg(long, default_value = animdl::DEFAULT_ANIM_DIR)]
    out_dir: PathBuf,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = 500)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 500)]
    height: u32,

    /// Sphere/torus subdivisions.
    #[arg(long, default_value_t = 100)]
    step: u32,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Render chunk size (parallel mode only).
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,

    /// Skip `display` commands instead of launching a viewer.
    #[arg(long, default_value_t = false)]
    no_display: bool,
}

#[derive(Parser, Debug)]
struct KnobsArgs {
    /// Input script JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Knobs(args) => cmd_knobs(args),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let script = animdl::Script::from_path(&args.in_path)?;

    let settings = animdl::RenderSettings {
        canvas: animdl::Canvas::new(args.width, args.height)?,
        step: args.step,
        anim_dir: args.out_dir.clone(),
        threading: animdl::RenderThreading {
            parallel: args.parallel,
            chunk_size: args.chunk_size,
            threads: args.threads,
        },
        ..animdl::RenderSettings::default()
    };

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create animation dir '{}'", args.out_dir.display()))?;

    let display_program = if args.no_display {
        None
    } else {
        let program = PathBuf::from("display");
        if animdl::is_program_on_path(&program) {
            Some(program)
        } else {
            tracing::warn!(program = %program.display(), "viewer not found on PATH; display disabled");
            None
        }
    };
    let mut out = animdl::ImageOutput::new(animdl::ImageOutputOpts { display_program });

    let stats = animdl::render_animation(
        &script,
        &settings,
        &animdl::ScanlineRasterizer::new(),
        &mut out,
    )
    .with_context(|| format!("render '{}'", args.in_path.display()))?;

    eprintln!(
        "wrote {} frame(s) to {}",
        stats.frames_rendered,
        args.out_dir.display()
    );
    Ok(())
}

fn cmd_knobs(args: KnobsArgs) -> anyhow::Result<()> {
    let script = animdl::Script::from_path(&args.in_path)?;
    let plan = animdl::AnimationPlan::build(&script.commands)
        .with_context(|| format!("plan '{}'", args.in_path.display()))?;
    let json = serde_json::to_string_pretty(&plan).context("serialize knob table")?;
    println!("{json}");
    Ok(())
}
