//! One complete analysis run: load, score, encode, correlate, regress, plot.
//!
//! Progress goes to stdout as the run advances; diagnostics go through
//! `log`.

use crate::analysis::{
    complete_cases, correlate_factors, correlation_matrix, fit_standardized, report,
    scored_sample_size, write_correlation_report, CorrelationStrength, FactorCorrelation,
    RegressionSummary,
};
use crate::config::AnalysisConfig;
use crate::error::{Result, SurveyError};
use crate::model::{clean_records, encode_records, EncodedRecord, EncodingReport};
use crate::plot::font::SERIF_FACE;
use crate::plot::{self, resolve_font, FontStrategy};
use crate::survey::{read_survey_file, RawTable, SurveyColumns};
use std::fs;
use std::path::PathBuf;

/// What a completed run produced
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub respondents: usize,
    /// Respondents with a dislike score
    pub scored: usize,
    pub correlations: Vec<FactorCorrelation>,
    pub regression: RegressionSummary,
    pub encoding: EncodingReport,
    /// Files written, in order
    pub outputs: Vec<PathBuf>,
}

#[derive(Debug)]
pub enum RunOutcome {
    /// The input file does not exist; nothing was written
    InputMissing(PathBuf),
    /// The input exists but could not be read as a survey CSV
    ReadFailed(SurveyError),
    Completed(RunSummary),
}

/// Read the survey table named by the configuration
pub fn load_survey(config: &AnalysisConfig) -> Result<RawTable> {
    read_survey_file(&config.input)
}

/// Score and encode every respondent, warning about unknown answers
pub fn prepare_records(
    table: &RawTable,
    config: &AnalysisConfig,
) -> Result<(Vec<EncodedRecord>, EncodingReport)> {
    let columns = SurveyColumns::resolve(&table.headers)?;
    log::debug!("Resolved columns: {:?}", columns);

    let cleaned = clean_records(table, &columns, config.score_policy);
    let (encoded, encoding) = encode_records(&cleaned);

    for (column, labels) in &encoding.unrecognized {
        for (label, count) in labels {
            log::warn!(
                "{}: unrecognized answer '{}' ({} rows) treated as missing",
                column,
                label,
                count
            );
            println!("⚠️ 未知の回答を欠損として扱いました: {} = {} ({}件)", column, label, count);
        }
    }

    Ok((encoded, encoding))
}

fn print_correlations(results: &[FactorCorrelation]) {
    println!("\n📊 --- 各環境要因と虫嫌いスコアの相関分析 ---");
    for result in results {
        let strength = CorrelationStrength::from_r(result.correlation.r)
            .map(|s| s.japanese())
            .unwrap_or("算出不可");
        println!("{}  [{}]", report::format_result_line(result).trim(), strength);
    }
    println!("\n有意水準: *** p<0.001, ** p<0.01, * p<0.05, n.s. 有意でない");
    println!("負の相関 → その要因が強いほど虫嫌いが減る");
    println!("正の相関 → その要因が強いほど虫嫌いが増える");
}

fn regress(records: &[EncodedRecord]) -> RegressionSummary {
    println!("\n📊 --- 重回帰分析結果（標準化係数） ---");
    let summary = match fit_standardized(records) {
        Ok(summary) => summary,
        Err(e) => {
            log::warn!("Regression skipped: {}", e);
            println!("⚠️ 重回帰分析を実行できませんでした: {}", e);
            let complete = complete_cases(records).0.len();
            return RegressionSummary::undefined(complete);
        }
    };

    for (factor, coefficient) in &summary.coefficients {
        println!("{:<25} {:>10.6}", factor.column(), coefficient);
    }
    println!("N={}, R²={:.3}", summary.n, summary.r_squared);
    println!("-> 値がマイナスであるほど、その要因が強いと「虫嫌いが減る」ことを意味します。");
    summary
}

fn render_plots(
    config: &AnalysisConfig,
    records: &[EncodedRecord],
    regression: &RegressionSummary,
    outputs: &mut Vec<PathBuf>,
) -> Result<()> {
    let font = resolve_font(config.font_strategy);
    println!("ℹ️ フォント設定: {}", font.family);
    if font.fallback {
        match config.font_strategy {
            FontStrategy::Serif => {
                println!("ℹ️ {} が見つからないため {} で描画します", SERIF_FACE, font.family)
            }
            FontStrategy::Cjk => println!("ℹ️ 日本語フォントが見つからないため英語ラベルで描画します"),
        }
    }

    for spec in &plot::BOXPLOTS {
        let path = plot::render_boxplot(&config.output_dir, spec, records, &font)?;
        println!("✅ 図{} 保存完了: {}", spec.figure, spec.file_name);
        outputs.push(path);
    }

    let matrix = correlation_matrix(records);
    let path = plot::render_heatmap(&config.output_dir, &matrix, &font)?;
    println!("✅ 図2 保存完了: {}", plot::HEATMAP_FILE);
    outputs.push(path);

    let path = plot::render_coefficients(&config.output_dir, regression, &font)?;
    println!("✅ 図3 保存完了: {}", plot::COEFFICIENTS_FILE);
    outputs.push(path);

    Ok(())
}

/// Run the whole analysis. Nothing is written when the input is missing
/// or unreadable.
pub fn run(config: &AnalysisConfig) -> Result<RunOutcome> {
    if !config.input.exists() {
        return Ok(RunOutcome::InputMissing(config.input.clone()));
    }

    println!("🚀 分析を開始します: {}", config.input.display());
    let table = match load_survey(config) {
        Ok(table) => table,
        Err(e) => return Ok(RunOutcome::ReadFailed(e)),
    };
    log::info!("Loaded {} respondents from {}", table.len(), config.input.display());
    if table.is_empty() {
        log::warn!("{} has a header row but no responses", config.input.display());
    }

    let (records, encoding) = prepare_records(&table, config)?;
    let scored = scored_sample_size(&records);

    let correlations = correlate_factors(&records);
    print_correlations(&correlations);

    fs::create_dir_all(&config.output_dir)?;
    let mut outputs = Vec::new();
    outputs.push(write_correlation_report(&config.output_dir, scored, &correlations)?);
    println!("✅ 相関分析結果を保存: {}", report::REPORT_FILE_NAME);

    let regression = regress(&records);

    if config.render_plots {
        render_plots(config, &records, &regression, &mut outputs)?;
    } else {
        println!("ℹ️ グラフの描画をスキップしました");
    }

    println!("\n✨ 全ての処理が完了しました。");

    Ok(RunOutcome::Completed(RunSummary {
        respondents: table.len(),
        scored,
        correlations,
        regression,
        encoding,
        outputs,
    }))
}
