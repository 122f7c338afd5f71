use clap::Parser;
use std::process;
use tracing::{error, info, warn};
use typometer::compare;
use typometer::config::SpeedModel;
use typometer::error::{TmResult, TypometerError};
use typometer::layouts::Layout;
use typometer::sim;

mod reports;

/// Estimate how costly a piece of text is to type on a keyboard layout.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Builtin layout name (qwerty, dvorak, colemak) or path to a layout CSV.
    #[arg(short, long, default_value = "qwerty")]
    layout: String,

    /// Literal text to simulate.
    #[arg(short, long)]
    text: Option<String>,

    /// Read the text from a file instead.
    #[arg(short, long)]
    file: Option<String>,

    /// Score every line of the input and report the costliest one.
    #[arg(long, default_value_t = false)]
    compare: bool,

    /// Fan line scoring out over a worker pool (compare mode only).
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Print only the summary, without the per-keystroke movement table.
    #[arg(long, default_value_t = false)]
    no_visualize: bool,

    /// Emit results as JSON instead of tables.
    #[arg(long, default_value_t = false)]
    json: bool,

    #[arg(long, default_value_t = false)]
    debug: bool,

    #[command(flatten)]
    speed: SpeedModel,
}

static SAMPLE_TEXT: &str = "the quick brown fox jumps over the lazy dog";

fn load_text(cli: &Cli) -> TmResult<String> {
    match (&cli.text, &cli.file) {
        (Some(_), Some(_)) => Err(TypometerError::InputConflict),
        (Some(text), None) => Ok(text.clone()),
        (None, Some(path)) => Ok(std::fs::read_to_string(path)?),
        (None, None) => {
            info!("no input given, simulating the builtin sample");
            Ok(SAMPLE_TEXT.to_string())
        }
    }
}

fn run(cli: &Cli) -> TmResult<()> {
    let text = load_text(cli)?;

    let layout = Layout::resolve(&cli.layout)?;
    info!(layout = %layout.name, keys = layout.key_count(), "layout loaded");

    if cli.parallel && !cli.compare {
        warn!("--parallel only affects --compare; a single simulation stays sequential");
    }

    if cli.compare {
        match compare::compare(&layout, &text, &cli.speed, cli.parallel) {
            Some(best) => {
                if cli.json {
                    println!("{}", serde_json::to_string_pretty(&best)?);
                } else {
                    reports::print_best_line(&layout.name, &best);
                }
            }
            None => {
                if cli.json {
                    println!("null");
                } else {
                    println!("no result: the input contained no non-empty lines");
                }
            }
        }
        return Ok(());
    }

    let trace = sim::simulate(&layout, &text);
    let summary = sim::aggregate(&trace, &cli.speed);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    if !cli.no_visualize {
        reports::print_trace(&trace);
    }
    reports::print_summary(&layout.name, &summary);
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }

    if let Err(e) = run(&cli) {
        error!("{}", e);
        process::exit(1);
    }
}
