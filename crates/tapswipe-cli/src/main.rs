//! tapswipe CLI - replay recorded touch traces and check gesture configs.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tapswipe_core::{Gesture, GestureConfig, GestureKind};
use tapswipe_yaml::{config_to_string, load_config, load_trace, Format, TimedGesture};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "tapswipe")]
#[command(about = "Tap, long-tap and swipe recognition for recorded touch input")]
#[command(version)]
struct Cli {
    /// Log recognizer decisions (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a touch trace and print the recognized gestures
    Replay {
        /// Trace file (.yaml, .yml or .json)
        trace: PathBuf,

        /// Config file overriding the trace's embedded thresholds
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Expected gesture kinds, comma separated (e.g. "tap,swipe")
        #[arg(long, value_delimiter = ',')]
        expect: Option<Vec<String>>,
    },

    /// Check that a config file is valid
    Check {
        /// Config file (.yaml, .yml, .json or .toml)
        config: PathBuf,
    },

    /// Print the default config
    Defaults {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ConfigFormat::Yaml)]
        format: ConfigFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ConfigFormat {
    Yaml,
    Json,
    Toml,
}

impl From<ConfigFormat> for Format {
    fn from(format: ConfigFormat) -> Self {
        match format {
            ConfigFormat::Yaml => Self::Yaml,
            ConfigFormat::Json => Self::Json,
            ConfigFormat::Toml => Self::Toml,
        }
    }
}

/// Exit status when a replay does not match `--expect`.
const EXPECTATION_FAILED: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = run(cli.command);
    if let Err(err) = &result {
        eprintln!("error: {err:#}");
    }
    ExitCode::from(exit_status(&result))
}

fn exit_status(result: &Result<bool>) -> u8 {
    match result {
        Ok(true) => 0,
        Ok(false) => EXPECTATION_FAILED,
        Err(_) => 1,
    }
}

fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "tapswipe_core=debug,tapswipe_yaml=debug,tapswipe=debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Returns `Ok(false)` when a replay does not match `--expect`.
fn run(command: Commands) -> Result<bool> {
    match command {
        Commands::Replay {
            trace,
            config,
            format,
            expect,
        } => replay(&trace, config.as_deref(), format, expect.as_deref()),
        Commands::Check { config } => {
            let loaded = load_config(&config)
                .with_context(|| format!("{} is not a valid config", config.display()))?;
            println!(
                "{}: ok (long tap > {}s, swipe > {}, poll every {}ms)",
                config.display(),
                loaded.long_tap_threshold_secs,
                loaded.swipe_threshold_distance,
                loaded.poll_interval_ms
            );
            Ok(true)
        }
        Commands::Defaults { format } => {
            print!("{}", config_to_string(&GestureConfig::default(), format.into())?);
            Ok(true)
        }
    }
}

fn replay(
    trace_path: &Path,
    config_path: Option<&Path>,
    format: OutputFormat,
    expect: Option<&[String]>,
) -> Result<bool> {
    let trace = load_trace(trace_path)
        .with_context(|| format!("failed to load trace {}", trace_path.display()))?;
    let config = config_path
        .map(load_config)
        .transpose()
        .context("failed to load config")?;

    info!(
        events = trace.events.len(),
        end_ms = trace.end_time_ms(),
        "replaying trace"
    );
    let gestures = trace.replay(config.as_ref());

    match format {
        OutputFormat::Text => {
            for timed in &gestures {
                println!("{}", describe(timed));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&gestures)?);
        }
    }

    let Some(expected) = expect else {
        return Ok(true);
    };
    let expected = parse_kinds(expected)?;
    Ok(matches_expectation(&gestures, &expected))
}

/// Compare recognized gestures with expected kinds, counting a long tap
/// once.
fn matches_expectation(gestures: &[TimedGesture], expected: &[GestureKind]) -> bool {
    let actual: Vec<GestureKind> = gestures
        .iter()
        .filter(|g| !matches!(g.gesture, Gesture::LongTapEnded { .. }))
        .map(|g| g.gesture.kind())
        .collect();
    debug!(?expected, ?actual, "comparing against expectation");

    if actual == expected {
        true
    } else {
        eprintln!("expected {expected:?}, got {actual:?}");
        false
    }
}

fn parse_kinds(names: &[String]) -> Result<Vec<GestureKind>> {
    names
        .iter()
        .map(|name| match name.trim() {
            "tap" => Ok(GestureKind::Tap),
            "long_tap" | "long-tap" => Ok(GestureKind::LongTap),
            "swipe" => Ok(GestureKind::Swipe),
            other => bail!("unknown gesture kind '{other}'"),
        })
        .collect()
}

fn describe(timed: &TimedGesture) -> String {
    let t = timed.time_ms;
    match timed.gesture {
        Gesture::Tap { delta } => format!("{t:>8}ms  tap            delta=({}, {})", delta.x, delta.y),
        Gesture::LongTapBegan { position } => {
            format!("{t:>8}ms  long-tap began at=({}, {})", position.x, position.y)
        }
        Gesture::LongTapEnded { delta } => {
            format!("{t:>8}ms  long-tap ended delta=({}, {})", delta.x, delta.y)
        }
        Gesture::Swipe { direction, delta } => {
            format!("{t:>8}ms  swipe {direction:<8} delta=({}, {})", delta.x, delta.y)
        }
    }
}
