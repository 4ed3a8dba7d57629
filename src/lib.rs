//! Tumor evolution simulation and risk-scoring engine.
//!
//! Pure, request-scoped computation: closed-form growth/survival modeling,
//! weighted risk aggregation, dose-tweak perturbation, explanation ranking
//! and report assembly. All I/O happens at the pipeline edges.

pub mod cli;
pub mod ctx;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod schema;
pub mod sim;
