//! Plain-text correlation report written alongside the charts.

use super::correlation::FactorCorrelation;
use crate::error::Result;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

pub const REPORT_FILE_NAME: &str = "correlation_results.txt";

const RULE_WIDTH: usize = 60;

/// Fixed-point formatting that prints undefined values as `nan`
fn fixed(value: f64, width: usize, precision: usize) -> String {
    if value.is_nan() {
        format!("{:>width$}", "nan", width = width)
    } else {
        format!("{:>width$.precision$}", value, width = width, precision = precision)
    }
}

/// One result row, e.g. `読書習慣  ...: r=-0.123, p=0.0450 *`
pub fn format_result_line(result: &FactorCorrelation) -> String {
    format!(
        "{:<20}: r={}, p={} {}",
        result.factor.report_label(),
        fixed(result.correlation.r, 6, 3),
        fixed(result.correlation.p_value, 0, 4),
        result.significance.stars()
    )
}

pub fn format_correlation_report(sample_size: usize, results: &[FactorCorrelation]) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "{}", heavy);
    let _ = writeln!(out, "各環境要因と虫嫌いスコアの相関分析結果");
    let _ = writeln!(out, "{}\n", heavy);
    let _ = writeln!(out, "分析方法: スピアマンの順位相関係数");
    let _ = writeln!(out, "サンプルサイズ: N={}\n", sample_size);
    let _ = writeln!(out, "{}", light);

    for result in results {
        let _ = writeln!(out, "{}", format_result_line(result));
    }

    let _ = writeln!(out, "{}\n", light);
    out.push_str(concat!(
        "【有意水準】\n",
        "  *** : p < 0.001 (非常に有意)\n",
        "  **  : p < 0.01  (有意)\n",
        "  *   : p < 0.05  (やや有意)\n",
        "  n.s.: p >= 0.05 (有意でない)\n\n",
        "【解釈】\n",
        "  負の相関(r < 0): その要因が強いほど虫嫌いが減る傾向\n",
        "  正の相関(r > 0): その要因が強いほど虫嫌いが増える傾向\n",
        "  |r| > 0.5: 強い相関\n",
        "  0.3 < |r| <= 0.5: 中程度の相関\n",
        "  0.1 < |r| <= 0.3: 弱い相関\n",
        "  |r| <= 0.1: ほぼ相関なし\n",
    ));

    out
}

/// Write the report into `output_dir`, replacing any previous one
pub fn write_correlation_report(
    output_dir: &Path,
    sample_size: usize,
    results: &[FactorCorrelation],
) -> Result<PathBuf> {
    let path = output_dir.join(REPORT_FILE_NAME);
    fs::write(&path, format_correlation_report(sample_size, results))?;
    log::info!("Wrote {}", path.display());
    Ok(path)
}
