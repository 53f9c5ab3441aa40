use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

use eruption::{
    Canvas, Channel, Engine, EngineConfig, FragCoord, FrameStats, ImageSink, Resolution,
};

#[derive(Parser, Debug)]
#[command(name = "eruption", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the tree after a number of mutations.
    Print(PrintArgs),
    /// Evaluate the tree at one normalized coordinate.
    Sample(SampleArgs),
    /// Mutate repeatedly and report every generation.
    Evolve(EvolveArgs),
    /// Render a frame in memory and print its statistics as JSON.
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct EngineArgs {
    /// Engine config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed (overrides the config).
    #[arg(long)]
    seed: Option<u64>,

    /// Mutations to apply to the seed tree first.
    #[arg(long, default_value_t = 0)]
    mutations: u32,

    /// Start from the constant `0` instead of `log(X)`.
    #[arg(long, default_value_t = false)]
    from_zero: bool,
}

#[derive(Parser, Debug)]
struct PrintArgs {
    #[command(flatten)]
    engine: EngineArgs,

    /// Pack tokens into the on-screen debug layout.
    #[arg(long, default_value_t = false)]
    lines: bool,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    #[command(flatten)]
    engine: EngineArgs,

    /// Horizontal coordinate in [-1, 1].
    #[arg(long, allow_negative_numbers = true)]
    x: f64,

    /// Vertical coordinate in [-1, 1].
    #[arg(long, allow_negative_numbers = true)]
    y: f64,
}

#[derive(Parser, Debug)]
struct EvolveArgs {
    #[command(flatten)]
    engine: EngineArgs,

    /// Number of interactions.
    #[arg(long, default_value_t = 8)]
    steps: u32,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    engine: EngineArgs,

    /// Frame width (overrides the config).
    #[arg(long)]
    width: Option<u32>,

    /// Frame height (overrides the config).
    #[arg(long)]
    height: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Print(args) => cmd_print(args),
        Command::Sample(args) => cmd_sample(args),
        Command::Evolve(args) => cmd_evolve(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn load_config(args: &EngineArgs) -> anyhow::Result<EngineConfig> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => EngineConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    Ok(config)
}

fn build_engine(args: &EngineArgs, config: EngineConfig) -> anyhow::Result<Engine> {
    let mut engine = Engine::new(config)?;
    if args.from_zero {
        engine.reset();
    }
    for _ in 0..args.mutations {
        engine.mutate();
    }
    Ok(engine)
}

fn cmd_print(args: PrintArgs) -> anyhow::Result<()> {
    let config = load_config(&args.engine)?;
    let engine = build_engine(&args.engine, config)?;
    if args.lines {
        for line in engine.debug_lines() {
            println!("{line}");
        }
    } else {
        println!("{}", engine.root());
    }
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let config = load_config(&args.engine)?;
    let engine = build_engine(&args.engine, config)?;
    let frag = FragCoord::new(args.x, args.y);
    for ch in Channel::ALL {
        println!("{ch:?}: {}", engine.evaluate(frag, ch));
    }
    let rgb = engine.sample_rgb(frag);
    println!("rgb: {} {} {}", rgb.r, rgb.g, rgb.b);
    Ok(())
}

fn cmd_evolve(args: EvolveArgs) -> anyhow::Result<()> {
    let config = load_config(&args.engine)?;
    let mut engine = build_engine(&args.engine, config)?;
    for step in 1..=args.steps {
        let outcome = engine.mutate();
        let verdict = match outcome.resolution {
            Resolution::Accepted => "accepted",
            Resolution::KeptPrevious => "kept previous",
            Resolution::KeptLastAttempt => "kept last attempt",
        };
        println!(
            "step {step}: generation {} after {} attempt(s), {verdict}: {}",
            engine.generation(),
            outcome.attempts,
            engine.root()
        );
    }
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut config = load_config(&args.engine)?;
    config.canvas = Canvas::new(
        args.width.unwrap_or(config.canvas.width),
        args.height.unwrap_or(config.canvas.height),
    )?;
    let engine = build_engine(&args.engine, config)?;

    let mut sink = ImageSink::new();
    engine.render(&mut sink)?;
    let image = sink
        .into_image()
        .context("renderer finished without producing a frame")?;

    let stats = FrameStats::from_image(&image);
    println!(
        "{}",
        serde_json::to_string_pretty(&stats).context("serialize frame stats")?
    );
    Ok(())
}
