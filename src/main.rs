use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use tumor_twin::cli::{ArmArg, Cli, Commands, CommonArgs};
use tumor_twin::ctx::{Ctx, Operation};
use tumor_twin::io::snapshot;
use tumor_twin::pipeline::Pipeline;
use tumor_twin::pipeline::stage0_validate::Stage0Validate;
use tumor_twin::pipeline::stage1_perturb::Stage1Perturb;
use tumor_twin::pipeline::stage2_simulate::Stage2Simulate;
use tumor_twin::pipeline::stage3_compare::Stage3Compare;
use tumor_twin::pipeline::stage4_risk::Stage4Risk;
use tumor_twin::pipeline::stage5_predict::Stage5Predict;
use tumor_twin::pipeline::stage6_explain::Stage6Explain;
use tumor_twin::pipeline::stage7_report::Stage7Report;
use tumor_twin::pipeline::stage8_output::Stage8Output;
use tumor_twin::sim::TreatmentArm;
use tumor_twin::sim::report::rank_arms;

const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Simulate(args) => {
            let arms = vec![to_arm(args.arm), to_arm(args.alt)];
            let ctx = build_ctx(&args.common, Operation::Simulate, arms, args.dose_tweak)?;
            run(ctx, simulate_stages())
        }
        Commands::Predict(args) => {
            let arms = vec![to_arm(args.arm)];
            let ctx = build_ctx(&args.common, Operation::Predict, arms, args.dose_tweak)?;
            run(ctx, predict_stages())
        }
        Commands::Explain(args) => {
            // Explanation ranks drivers against the primary-arm prediction.
            let arms = vec![rank_arms()[0]];
            let ctx = build_ctx(&args.common, Operation::Explain, arms, 0)?;
            run(ctx, explain_stages())
        }
        Commands::Report(args) => {
            let arms = vec![rank_arms()[0]];
            let ctx = build_ctx(&args.common, Operation::Report, arms, 0)?;
            run(ctx, report_stages())
        }
    }
}

fn run(mut ctx: Ctx, stages: Vec<Box<dyn tumor_twin::pipeline::Stage>>) -> Result<()> {
    let pipeline = Pipeline::new(stages);
    pipeline.run(&mut ctx)?;
    println!("{}", ctx.output.json_path.display());
    Ok(())
}

fn build_ctx(
    common: &CommonArgs,
    operation: Operation,
    arms: Vec<TreatmentArm>,
    dose_tweak: u8,
) -> Result<Ctx> {
    let snapshot = snapshot::load(&common.patients)?;
    let entry = snapshot::find_patient(&snapshot, &common.patient)?;
    Ok(Ctx::new(
        operation,
        entry.profile.clone(),
        entry.followups.clone(),
        arms,
        dose_tweak,
        PathBuf::from(&common.out),
        TOOL_VERSION,
    ))
}

fn to_arm(arg: ArmArg) -> TreatmentArm {
    match arg {
        ArmArg::Chemo => TreatmentArm::Chemo,
        ArmArg::Radiation => TreatmentArm::Radiation,
        ArmArg::Combined => TreatmentArm::Combined,
        ArmArg::SurgeryChemo => TreatmentArm::SurgeryChemo,
    }
}

fn simulate_stages() -> Vec<Box<dyn tumor_twin::pipeline::Stage>> {
    vec![
        Box::new(Stage0Validate::new()),
        Box::new(Stage1Perturb::new()),
        Box::new(Stage2Simulate::new()),
        Box::new(Stage3Compare::new()),
        Box::new(Stage8Output::new()),
    ]
}

fn predict_stages() -> Vec<Box<dyn tumor_twin::pipeline::Stage>> {
    vec![
        Box::new(Stage0Validate::new()),
        Box::new(Stage1Perturb::new()),
        Box::new(Stage2Simulate::new()),
        Box::new(Stage4Risk::new()),
        Box::new(Stage5Predict::new()),
        Box::new(Stage8Output::new()),
    ]
}

fn explain_stages() -> Vec<Box<dyn tumor_twin::pipeline::Stage>> {
    vec![
        Box::new(Stage0Validate::new()),
        Box::new(Stage1Perturb::new()),
        Box::new(Stage2Simulate::new()),
        Box::new(Stage4Risk::new()),
        Box::new(Stage5Predict::new()),
        Box::new(Stage6Explain::new()),
        Box::new(Stage8Output::new()),
    ]
}

fn report_stages() -> Vec<Box<dyn tumor_twin::pipeline::Stage>> {
    vec![
        Box::new(Stage0Validate::new()),
        Box::new(Stage1Perturb::new()),
        Box::new(Stage2Simulate::new()),
        Box::new(Stage4Risk::new()),
        Box::new(Stage5Predict::new()),
        Box::new(Stage7Report::new()),
        Box::new(Stage8Output::new()),
    ]
}
