use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "tumor-twin", version, about = "Digital-twin tumor simulation CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Side-by-side what-if simulation of two treatment arms
    Simulate(SimulateArgs),
    /// Trajectory, risk factors and impact for one treatment arm
    Predict(PredictArgs),
    /// Ranked key-driver statements for a patient
    Explain(ExplainArgs),
    /// Comprehensive narrative report for a patient
    Report(ReportArgs),
}

#[derive(Debug, Args)]
pub struct CommonArgs {
    #[arg(long, help = "Patient snapshot JSON exported by the external store")]
    pub patients: PathBuf,

    #[arg(long, help = "Patient identifier to select from the snapshot")]
    pub patient: String,

    #[arg(long)]
    pub out: PathBuf,
}

#[derive(Debug, Args)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[arg(long, value_enum, default_value_t = ArmArg::SurgeryChemo)]
    pub arm: ArmArg,

    #[arg(long, value_enum, default_value_t = ArmArg::Chemo)]
    pub alt: ArmArg,

    #[arg(long, default_value_t = 0, help = "Clinician dose tweak level (0-3)")]
    pub dose_tweak: u8,
}

#[derive(Debug, Args)]
pub struct PredictArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[arg(long, value_enum, default_value_t = ArmArg::Chemo)]
    pub arm: ArmArg,

    #[arg(long, default_value_t = 0, help = "Clinician dose tweak level (0-3)")]
    pub dose_tweak: u8,
}

#[derive(Debug, Args)]
pub struct ExplainArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ArmArg {
    Chemo,
    Radiation,
    Combined,
    SurgeryChemo,
}
