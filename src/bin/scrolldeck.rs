use std::{
    cell::RefCell,
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    rc::Rc,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

use scrolldeck::{
    Deck, DeckController, DeckFrame, Ease, Evaluator, RenderSink, ScrollBehavior, SimViewport,
    SlideIndex, Viewport as _, ViewportMetrics,
};

#[derive(Parser, Debug)]
#[command(name = "scrolldeck", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate the deck at one progress value and print the frame as JSON.
    Sample(SampleArgs),
    /// Evaluate an even progress grid and print one JSON frame per line.
    Sweep(SweepArgs),
    /// Simulate a smooth jump-to-slide and print every notification as JSON.
    Jump(JumpArgs),
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Input deck JSON (defaults to the built-in three-slide deck).
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Scroll progress, normally in [0, 1].
    #[arg(long)]
    progress: f64,
}

#[derive(Parser, Debug)]
struct SweepArgs {
    /// Input deck JSON (defaults to the built-in three-slide deck).
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Number of evaluation steps across 0..=1.
    #[arg(long, default_value_t = 21)]
    steps: usize,
}

#[derive(Parser, Debug)]
struct JumpArgs {
    /// Input deck JSON (defaults to the built-in three-slide deck).
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Target slide (1-based).
    #[arg(long)]
    slide: usize,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Progress to start scrolling from.
    #[arg(long, default_value_t = 0.0)]
    from: f64,

    /// Smooth-scroll duration in ticks.
    #[arg(long, default_value_t = 24)]
    ticks: u32,

    /// Easing applied to the smooth scroll.
    #[arg(long, value_enum, default_value_t = EaseChoice::InOutCubic)]
    ease: EaseChoice,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EaseChoice {
    Linear,
    OutQuad,
    InOutQuad,
    OutCubic,
    InOutCubic,
    OutExpo,
}

impl From<EaseChoice> for Ease {
    fn from(choice: EaseChoice) -> Self {
        match choice {
            EaseChoice::Linear => Ease::Linear,
            EaseChoice::OutQuad => Ease::OutQuad,
            EaseChoice::InOutQuad => Ease::InOutQuad,
            EaseChoice::OutCubic => Ease::OutCubic,
            EaseChoice::InOutCubic => Ease::InOutCubic,
            EaseChoice::OutExpo => Ease::OutExpo,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Sample(args) => cmd_sample(args),
        Command::Sweep(args) => cmd_sweep(args),
        Command::Jump(args) => cmd_jump(args),
    }
}

fn load_deck(path: Option<&Path>) -> anyhow::Result<Deck> {
    let Some(path) = path else {
        return Ok(Deck::standard(["Home", "Introduction", "Announcements"]));
    };
    let f = File::open(path).with_context(|| format!("open deck '{}'", path.display()))?;
    let r = BufReader::new(f);
    let deck: Deck = serde_json::from_reader(r).with_context(|| "parse deck JSON")?;
    Ok(deck)
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let deck = load_deck(args.in_path.as_deref())?;
    let frame = Evaluator::eval_progress(&deck, args.progress)?;
    println!("{}", serde_json::to_string_pretty(&frame)?);
    Ok(())
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    let deck = load_deck(args.in_path.as_deref())?;
    deck.validate()?;

    let steps = args.steps.max(2);
    for i in 0..steps {
        let progress = i as f64 / (steps - 1) as f64;
        let frame = Evaluator::eval_progress(&deck, progress)?;
        println!("{}", serde_json::to_string(&frame)?);
    }
    Ok(())
}

/// Prints each applied frame as one JSON line; highlight changes go to
/// stderr so stdout stays machine-readable.
struct JsonLineSink;

impl RenderSink for JsonLineSink {
    fn apply_frame(&mut self, frame: &DeckFrame) {
        let line = serde_json::to_string(frame).expect("serialize frame");
        println!("{line}");
    }

    fn set_highlight(&mut self, active: SlideIndex) {
        eprintln!("highlight -> slide {}", active.0);
    }
}

fn cmd_jump(args: JumpArgs) -> anyhow::Result<()> {
    let deck = load_deck(args.in_path.as_deref())?;
    deck.validate()?;

    let signal = scrolldeck::ProgressSignal::new(0.0);
    let metrics = ViewportMetrics::for_screens(args.height, deck.len())?;
    let mut sim = SimViewport::new(metrics, signal.clone()).with_smooth(args.ticks, args.ease.into());
    if args.from != 0.0 {
        sim.scroll_to(args.from * metrics.scrollable(), ScrollBehavior::Auto);
    }

    let viewport = Rc::new(RefCell::new(sim));
    let shared: scrolldeck::SharedViewport = viewport.clone();
    let controller = DeckController::mount(deck, &signal, Box::new(JsonLineSink), Some(shared))?;

    controller.jump_to_slide(SlideIndex(args.slide.max(1)));
    loop {
        let more = viewport.borrow_mut().tick();
        if !more {
            break;
        }
    }

    eprintln!(
        "settled at offset {} (slide {})",
        viewport.borrow().offset(),
        controller.active_slide().0
    );
    Ok(())
}
