use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "swell", version)]
struct Cli {
    /// Log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the wave height and raft target at one point as JSON.
    Height(HeightArgs),
    /// Run the scene loop and print one JSON snapshot per simulation step.
    Simulate(SimulateArgs),
    /// Print the GLSL vertex shader for the scene's wave field.
    Shader(SceneArgs),
    /// Write a grayscale heightmap PNG of the water surface.
    Heightmap(HeightmapArgs),
}

#[derive(Args, Debug)]
struct SceneArgs {
    /// Scene config JSON; overrides --preset.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Built-in scene.
    #[arg(long, value_enum, default_value_t = Preset::Diorama)]
    preset: Preset,
}

#[derive(Args, Debug)]
struct HeightArgs {
    #[command(flatten)]
    scene: SceneArgs,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    x: f64,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    z: f64,

    /// Time in seconds.
    #[arg(long, default_value_t = 0.0)]
    t: f64,
}

#[derive(Args, Debug)]
struct SimulateArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Host frames to run.
    #[arg(long, default_value_t = 60)]
    frames: u64,

    /// Host frame delta in seconds.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f64,

    /// Cutscene to start on the first frame.
    #[arg(long, value_enum)]
    story: Option<Story>,
}

#[derive(Args, Debug)]
struct HeightmapArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Time in seconds.
    #[arg(long, default_value_t = 0.0)]
    t: f64,

    /// Grid segments along each axis.
    #[arg(long, default_value_t = 128)]
    segments: u32,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Preset {
    Diorama,
    NightSea,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Story {
    Sunset,
    Intro,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Height(args) => cmd_height(args),
        Command::Simulate(args) => cmd_simulate(args),
        Command::Shader(args) => cmd_shader(args),
        Command::Heightmap(args) => cmd_heightmap(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_scene(args: &SceneArgs) -> anyhow::Result<swell::SceneConfig> {
    match &args.config {
        Some(path) => read_config(path),
        None => Ok(match args.preset {
            Preset::Diorama => swell::SceneConfig::diorama(),
            Preset::NightSea => swell::SceneConfig::night_sea(),
        }),
    }
}

fn read_config(path: &Path) -> anyhow::Result<swell::SceneConfig> {
    swell::SceneConfig::load(path).with_context(|| format!("load scene '{}'", path.display()))
}

fn cmd_height(args: HeightArgs) -> anyhow::Result<()> {
    let cfg = load_scene(&args.scene)?;
    let field = &cfg.water.field;
    let probe = swell::BuoyancyProbe::new(cfg.raft.probe_offset)?;
    let target = probe.sample(field, swell::Vec2::new(args.x, args.z), args.t);

    let out = serde_json::json!({
        "x": args.x,
        "z": args.z,
        "t": args.t,
        "height": field.height(args.x, args.z, args.t),
        "target": target,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let cfg = load_scene(&args.scene)?;
    let mut rl = swell::RenderLoop::new(&cfg)?;

    if let Some(story) = args.story {
        let ctx = rl.context_mut();
        let timeline = match story {
            Story::Sunset => swell::sunset_story(ctx.camera.position, swell::DIORAMA_FLOWER),
            Story::Intro => {
                let to = ctx.camera.position;
                swell::dolly_intro(to * 3.0, to)
            }
        };
        ctx.play(&timeline).context("start cutscene")?;
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut snapshots = Vec::new();
    for frame in 0..args.frames {
        rl.frame(args.dt, |s| snapshots.push(s.clone()))
            .with_context(|| format!("simulate frame {frame}"))?;
        for snap in snapshots.drain(..) {
            serde_json::to_writer(&mut out, &snap)?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    let stats = rl.shutdown();
    eprintln!(
        "simulated {} steps over {} frames",
        stats.steps_simulated, stats.frames_total
    );
    Ok(())
}

fn cmd_shader(args: SceneArgs) -> anyhow::Result<()> {
    let cfg = load_scene(&args)?;
    print!("{}", swell::vertex_shader(&cfg.water.field));
    Ok(())
}

fn cmd_heightmap(args: HeightmapArgs) -> anyhow::Result<()> {
    let cfg = load_scene(&args.scene)?;
    let box_size = cfg.water.box_size;
    let spec = swell::GridSpec {
        width: box_size.x,
        depth: box_size.z,
        segments_x: args.segments,
        segments_z: args.segments,
        center: swell::Vec2::ZERO,
    };
    let grid = swell::HeightGrid::sample(&cfg.water.field, spec, args.t)?;
    let img = grid.to_image(cfg.water.field.amplitude.max(f64::EPSILON))?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    img.save_with_format(&args.out, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
