pub mod analysis;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod plot;
pub mod stats;
pub mod survey;

pub use config::AnalysisConfig;
pub use error::{Result, SurveyError};
pub use model::*;
pub use pipeline::{run, RunOutcome, RunSummary};
