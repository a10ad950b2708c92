use crate::utils::parser::parse_vec3;
use clap::{Args, Parser, Subcommand};
use nalgebra::Vector3;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Lantern CLI - grade how well two parts of a thousand-corner lantern model fit together.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate a joint attempt between two catalog parts.
    Evaluate(EvaluateArgs),
    /// Inspect the part catalog.
    Catalog(CatalogArgs),
}

/// Arguments for the `evaluate` subcommand.
#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Catalog part id of the anchoring part.
    #[arg(short = 'a', long, value_name = "ID")]
    pub part_a: u32,

    /// Catalog part id of the part being attached.
    #[arg(short = 'b', long, value_name = "ID")]
    pub part_b: u32,

    /// Path to a TOML part catalog. Defaults to the builtin demo set.
    #[arg(short, long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Position of the anchoring part as 'x,y,z' in design units.
    #[arg(long, value_name = "X,Y,Z", value_parser = parse_vec3, default_value = "0,0,0")]
    pub position_a: Vector3<f64>,

    /// Position of the attached part as 'x,y,z' in design units.
    #[arg(long, value_name = "X,Y,Z", value_parser = parse_vec3, default_value = "0,0,0")]
    pub position_b: Vector3<f64>,

    /// Rotation of the anchoring part as 'x,y,z' in degrees.
    #[arg(long, value_name = "X,Y,Z", value_parser = parse_vec3, default_value = "0,0,0")]
    pub rotation_a: Vector3<f64>,

    /// Rotation of the attached part as 'x,y,z' in degrees.
    #[arg(long, value_name = "X,Y,Z", value_parser = parse_vec3, default_value = "0,0,0")]
    pub rotation_b: Vector3<f64>,

    /// Floor the final score at zero instead of the historical open bound.
    #[arg(long)]
    pub clamp: bool,

    /// Print the verdict as JSON instead of human-readable text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `catalog` subcommand.
#[derive(Args, Debug)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

#[derive(Subcommand, Debug)]
pub enum CatalogCommands {
    /// List every part in the catalog.
    List {
        /// Path to a TOML part catalog. Defaults to the builtin demo set.
        #[arg(short, long, value_name = "PATH")]
        catalog: Option<PathBuf>,
    },
    /// Show one part in full detail.
    Show {
        /// Catalog part id to display.
        id: u32,

        /// Path to a TOML part catalog. Defaults to the builtin demo set.
        #[arg(short, long, value_name = "PATH")]
        catalog: Option<PathBuf>,
    },
}
