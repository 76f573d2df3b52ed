use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use lunkalendaro::Date;
use serde::Deserialize;

/// Gregorian to Chinese lunisolar calendar converter.
#[derive(Parser)]
#[command(
    name = "lunkalendaro",
    version,
    about = "Convert Gregorian dates into the Chinese lunisolar calendar"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a Gregorian date (today if omitted).
    Convert(ConvertArgs),
    /// Show the month lengths of a lunar year.
    Year(YearArgs),
}

/// Output form of the `convert` subcommand.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Form {
    /// Year name, zodiac, month and day, with festival and solar term.
    #[default]
    Long,
    /// Month and day only, with festival and solar term.
    Short,
    /// Short form, then long form on the next line.
    Both,
    /// Full record as JSON.
    Json,
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Gregorian date as YYYY-MM-DD.
    pub date: Option<Date>,

    /// Override output form from config.
    #[arg(short, long, value_enum)]
    pub form: Option<Form>,

    /// Use the legacy non-subtracting year walk.
    #[arg(long)]
    pub legacy: bool,

    /// UTC offset in hours used to pick today's date when DATE is omitted.
    #[arg(long, allow_hyphen_values = true)]
    pub utc_offset: Option<f64>,
}

/// Arguments for the `year` subcommand.
#[derive(clap::Args)]
pub struct YearArgs {
    /// Lunar year (1900..=2100).
    pub year: i32,
}
