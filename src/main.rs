use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use insect_survey::config::{AnalysisConfig, DEFAULT_INPUT};
use insect_survey::pipeline::{self, RunOutcome};
use insect_survey::plot::FontStrategy;
use insect_survey::ScorePolicy;

#[derive(Parser)]
#[command(name = "insect-survey")]
#[command(
    about = "Correlate childhood environment with insect dislike in survey data",
    long_about = None
)]
struct Cli {
    /// Survey CSV file (UTF-8, optional BOM)
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Directory for the report and the charts
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Chart font: Times New Roman with English labels, or a Japanese face
    #[arg(long, value_enum, env = "INSECT_SURVEY_FONT", default_value_t = FontArg::Serif)]
    font: FontArg,

    /// Leave the score missing for respondents with unanswered items
    #[arg(long)]
    require_complete_items: bool,

    /// Write the text report only
    #[arg(long)]
    skip_plots: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FontArg {
    Serif,
    Cjk,
}

impl From<FontArg> for FontStrategy {
    fn from(arg: FontArg) -> Self {
        match arg {
            FontArg::Serif => FontStrategy::Serif,
            FontArg::Cjk => FontStrategy::Cjk,
        }
    }
}

impl From<Cli> for AnalysisConfig {
    fn from(cli: Cli) -> Self {
        AnalysisConfig {
            input: cli.input,
            output_dir: cli.output_dir,
            font_strategy: cli.font.into(),
            score_policy: if cli.require_complete_items {
                ScorePolicy::RequireComplete
            } else {
                ScorePolicy::SkipMissing
            },
            render_plots: !cli.skip_plots,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let config = AnalysisConfig::from(Cli::parse());
    log::debug!("{:?}", config);

    // Missing or unreadable input is reported but is not a failed run
    match pipeline::run(&config).context("Survey analysis failed")? {
        RunOutcome::InputMissing(path) => {
            println!("ファイルが見つかりません: {}", path.display());
        }
        RunOutcome::ReadFailed(e) => {
            println!("❌ 読み込みエラー: {}", e);
        }
        RunOutcome::Completed(summary) => {
            log::info!(
                "Analyzed {} respondents ({} scored), wrote {} files",
                summary.respondents,
                summary.scored,
                summary.outputs.len()
            );
        }
    }

    Ok(())
}
