use crate::model::ScorePolicy;
use crate::plot::FontStrategy;
use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "data.csv";

/// Everything one analysis run needs to know
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub font_strategy: FontStrategy,
    pub score_policy: ScorePolicy,
    /// Write the PNG charts (the text report is always written)
    pub render_plots: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from("."),
            font_strategy: FontStrategy::default(),
            score_policy: ScorePolicy::default(),
            render_plots: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.input, PathBuf::from("data.csv"));
        assert_eq!(config.font_strategy, FontStrategy::Serif);
        assert_eq!(config.score_policy, ScorePolicy::SkipMissing);
        assert!(config.render_plots);
        assert_eq!(config.output_dir, PathBuf::from("."));
    }
}
