use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use matrixfx::{
    CancelToken, Canvas, CanvasSink, EffectSpec, FontSelector, FrameScheduler, PlayReport, Player,
    PngStripSink, ShowConfig, TerminalSink, from_entropy, parse_effect, run_show, seeded,
};

#[derive(Parser, Debug)]
#[command(name = "matrixfx", version)]
struct Cli {
    /// Print tracing diagnostics to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play one transition in the terminal.
    Play(PlayArgs),
    /// Play a JSON show file in the terminal.
    Show(ShowArgs),
    /// Render one transition to a vertical PNG strip of frames.
    Strip(StripArgs),
}

#[derive(Args, Debug)]
struct TransitionArgs {
    /// Text shown before the transition.
    #[arg(long, default_value = "")]
    from: String,

    /// Text shown after the transition.
    #[arg(long)]
    to: String,

    /// Effect kind (wipe, blinds, explode, pixelate, crossfade, curtain, marquee, roll, stripe).
    #[arg(long, default_value = "wipe")]
    effect: String,

    /// Effect parameters as a JSON object.
    #[arg(long)]
    params: Option<String>,

    /// Seed for the random effects; entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = FontChoice::Proportional)]
    font: FontChoice,

    #[arg(long, default_value_t = 64)]
    width: u32,

    #[arg(long, default_value_t = 8)]
    height: u32,
}

#[derive(Args, Debug)]
struct PlayArgs {
    #[command(flatten)]
    transition: TransitionArgs,

    /// Print every frame immediately instead of animating in place.
    #[arg(long)]
    unpaced: bool,
}

#[derive(Args, Debug)]
struct ShowArgs {
    /// Input show JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    #[arg(long)]
    unpaced: bool,
}

#[derive(Args, Debug)]
struct StripArgs {
    #[command(flatten)]
    transition: TransitionArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Image pixels per matrix pixel.
    #[arg(long, default_value_t = 4)]
    scale: u32,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FontChoice {
    Fixed,
    Proportional,
}

impl From<FontChoice> for FontSelector {
    fn from(choice: FontChoice) -> Self {
        match choice {
            FontChoice::Fixed => FontSelector::Fixed,
            FontChoice::Proportional => FontSelector::Proportional,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }
    match cli.cmd {
        Command::Play(args) => cmd_play(args),
        Command::Show(args) => cmd_show(args),
        Command::Strip(args) => cmd_strip(args),
    }
}

impl TransitionArgs {
    fn canvas(&self) -> anyhow::Result<Canvas> {
        Ok(Canvas::new(self.width, self.height)?)
    }

    fn effect(&self) -> anyhow::Result<EffectSpec> {
        let params = match &self.params {
            None => serde_json::Value::Null,
            Some(text) => serde_json::from_str(text).with_context(|| "parse --params JSON")?,
        };
        parse_effect(&self.effect, &params).with_context(|| format!("effect '{}'", self.effect))
    }

    fn run<S: CanvasSink>(
        &self,
        sink: &mut S,
        scheduler: FrameScheduler,
    ) -> anyhow::Result<PlayReport> {
        let effect = self.effect()?;
        let mut rng = self.seed.map(seeded).unwrap_or_else(from_entropy);
        let mut player = Player::new(sink, scheduler).with_font(self.font.into());
        let report = player.play_text(&effect, &self.from, &self.to, &mut rng)?;
        Ok(report)
    }
}

fn scheduler(unpaced: bool) -> FrameScheduler {
    if unpaced {
        FrameScheduler::unpaced(CancelToken::new())
    } else {
        FrameScheduler::new(CancelToken::new())
    }
}

fn clear_screen(unpaced: bool) {
    if !unpaced {
        print!("\x1b[2J");
    }
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    let canvas = args.transition.canvas()?;
    clear_screen(args.unpaced);
    let mut sink =
        TerminalSink::new(canvas, std::io::stdout().lock()).with_ansi_home(!args.unpaced);
    let report = args.transition.run(&mut sink, scheduler(args.unpaced))?;
    eprintln!("{}: {} frames", report.effect, report.frames);
    Ok(())
}

fn cmd_show(args: ShowArgs) -> anyhow::Result<()> {
    let config = ShowConfig::from_path(&args.in_path)?;
    clear_screen(args.unpaced);
    let mut sink =
        TerminalSink::new(config.canvas, std::io::stdout().lock()).with_ansi_home(!args.unpaced);
    let report = run_show(&config, &mut sink, scheduler(args.unpaced))
        .with_context(|| format!("run show '{}'", args.in_path.display()))?;
    eprintln!(
        "{} steps, {} frames",
        report.steps.len(),
        report.frames_presented()
    );
    Ok(())
}

fn cmd_strip(args: StripArgs) -> anyhow::Result<()> {
    let canvas = args.transition.canvas()?;
    let mut sink = PngStripSink::new(canvas, args.scale)?;
    let report = args
        .transition
        .run(&mut sink, FrameScheduler::unpaced(CancelToken::new()))?;
    sink.write(&args.out)
        .with_context(|| format!("write png '{}'", args.out.display()))?;
    eprintln!(
        "wrote {} ({} frames of {})",
        args.out.display(),
        report.frames,
        report.effect
    );
    Ok(())
}
