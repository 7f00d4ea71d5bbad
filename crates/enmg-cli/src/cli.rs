use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Command-line arguments for enmg
#[derive(Parser, Debug)]
#[command(name = "enmg")]
#[command(about = "Electrodiagnostic pattern analysis")]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long, global = true, env = "ENMG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score a diagnosis against a measurement file and rank differentials
    Analyze(AnalyzeArgs),
    /// List the patterns, protocol steps and categories of a catalog
    Patterns(PatternsArgs),
    /// Interpret a single nerve's conduction values
    Interpret(InterpretArgs),
    /// Compute the combined sensory index from its three latency differences
    CombinedIndex(CombinedIndexArgs),
    /// Inspect or create the config file
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// JSON measurement set: { "<test>": { "<param>": <number> } }
    #[arg(short, long)]
    pub measurements: PathBuf,

    /// Primary diagnosis id, e.g. carpaTunnel
    #[arg(short, long)]
    pub diagnosis: String,

    /// Alternate JSON catalog
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Differentials must score strictly above this
    #[arg(long)]
    pub min_probability: Option<f64>,

    /// Print the structured Markdown block instead of JSON
    #[arg(long)]
    pub structured: bool,
}

#[derive(Args, Debug)]
pub struct PatternsArgs {
    /// Alternate JSON catalog
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct InterpretArgs {
    /// Nerve id: mediano, cubital, peroneo, tibial, sural or radial
    #[arg(short, long)]
    pub nerve: String,

    /// Distal latency in ms
    #[arg(long)]
    pub latency: f64,

    /// Conduction velocity in m/s
    #[arg(long)]
    pub velocity: f64,

    /// Amplitude in mV
    #[arg(long)]
    pub amplitude: f64,
}

#[derive(Args, Debug)]
pub struct CombinedIndexArgs {
    /// Palmar median-ulnar latency difference in ms
    #[arg(long, allow_hyphen_values = true)]
    pub palm_diff: f64,

    /// Ring finger median-ulnar latency difference in ms
    #[arg(long, allow_hyphen_values = true)]
    pub ring_diff: f64,

    /// Thumb median-radial latency difference in ms
    #[arg(long, allow_hyphen_values = true)]
    pub thumb_diff: f64,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective config
    Show,
    /// Write a default config if none exists
    Init,
}
