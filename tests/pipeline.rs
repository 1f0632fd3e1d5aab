use insect_survey::config::AnalysisConfig;
use insect_survey::pipeline::{self, RunOutcome};
use insect_survey::plot::{self, FontStrategy};
use insect_survey::{Factor, SurveyError};
use std::fs;
use std::path::Path;

const HEADER: &str = concat!(
    "タイムスタンプ,",
    "性別を選択してください。,",
    "幼少期に最も長く住んでいた居住地域の種類を選択してください。,",
    "幼少期、屋外で遊ぶ際、よく山や川、海、田んぼなど、自然に近接した空間で遊んでいましたか？,",
    "幼少期によく本を読んでいましたか？,",
    "幼少期によく虫に関する本（図鑑等も含む）を読んでいましたか？,",
    "1. ゴキブリ,2. クモ,3. ハチ,4. ガ,5. ムカデ,6. カメムシ,7. ハエ,8. 蚊,9. アリ,10. ダンゴムシ,11. チョウ"
);

const ROWS: [&str; 10] = [
    "2024/01/01,女性,都心・都市部,ほとんど遊ばなかった,よく読んでいた,ほとんど読まなかった,5,5,4,5,5,4,5,4,3,3,2",
    "2024/01/01,男性,農村・漁村,よく遊んでいた,たまに読んでいた,よく読んでいた,2,1,2,1,2,2,1,1,1,1,1",
    "2024/01/02,女性,郊外住宅地・団地,たまに遊んでいた,よく読んでいた,たまに読んでいた,4,4,3,4,3,3,4,3,2,2,1",
    "2024/01/02,男性,地方中心市街地,たまに遊んでいた,ほとんど読まなかった,ほとんど読まなかった,3,3,3,2,3,3,2,3,2,1,1",
    "2024/01/03,女性,農村・漁村,よく遊んでいた,たまに読んでいた,たまに読んでいた,3,2,3,2,2,3,2,2,1,1,1",
    "2024/01/03,男性,都心・都市部,ほとんど遊ばなかった,たまに読んでいた,ほとんど読まなかった,5,4,4,4,4,5,4,3,3,2,2",
    "2024/01/04,女性,地方中心市街地,よく遊んでいた,よく読んでいた,よく読んでいた,1,1,2,1,1,2,1,1,1,1,1",
    "2024/01/04,男性,郊外住宅地・団地,たまに遊んでいた,ほとんど読まなかった,たまに読んでいた,4,3,4,3,3,4,3,3,2,2,2",
    "2024/01/05,回答しない,郊外住宅地・団地,たまに遊んでいた,よく読んでいた,たまに読んでいた,3,3,3,3,3,3,3,3,3,3,3",
    "2024/01/05,女性,都心・都市部,ほとんど遊ばなかった,,ほとんど読まなかった,,,,,,,,,,,",
];

fn write_survey(dir: &Path) -> std::path::PathBuf {
    let mut content = String::from("\u{feff}");
    content.push_str(HEADER);
    content.push('\n');
    for row in ROWS {
        content.push_str(row);
        content.push('\n');
    }
    let path = dir.join("data.csv");
    fs::write(&path, content).unwrap();
    path
}

fn config(input: &Path, output_dir: &Path) -> AnalysisConfig {
    AnalysisConfig {
        input: input.to_path_buf(),
        output_dir: output_dir.to_path_buf(),
        render_plots: false,
        ..Default::default()
    }
}

fn completed(outcome: RunOutcome) -> insect_survey::RunSummary {
    match outcome {
        RunOutcome::Completed(summary) => summary,
        other => panic!("expected a completed run, got {:?}", other),
    }
}

#[test]
fn test_missing_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let cfg = config(&dir.path().join("data.csv"), &out);

    match pipeline::run(&cfg).unwrap() {
        RunOutcome::InputMissing(path) => assert_eq!(path, dir.path().join("data.csv")),
        other => panic!("expected missing input, got {:?}", other),
    }
    assert!(matches!(
        pipeline::load_survey(&cfg),
        Err(SurveyError::InputNotFound(_))
    ));
    assert!(!out.exists());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_unreadable_input_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("data.csv");
    fs::write(&input, [0xffu8, 0xfe, 0x00, 0x41]).unwrap();
    let out = dir.path().join("out");

    match pipeline::run(&config(&input, &out)).unwrap() {
        RunOutcome::ReadFailed(SurveyError::Encoding(_)) => {}
        other => panic!("expected an encoding failure, got {:?}", other),
    }
    assert!(!out.exists());
}

#[test]
fn test_report_is_reproducible() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_survey(dir.path());
    let out = dir.path().join("out");
    let cfg = config(&input, &out);

    completed(pipeline::run(&cfg).unwrap());
    let first = fs::read(out.join("correlation_results.txt")).unwrap();
    completed(pipeline::run(&cfg).unwrap());
    let second = fs::read(out.join("correlation_results.txt")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_run_summary_and_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_survey(dir.path());
    let summary = completed(pipeline::run(&config(&input, dir.path())).unwrap());

    assert_eq!(summary.respondents, 10);
    assert_eq!(summary.scored, 10);
    assert_eq!(summary.correlations.len(), 5);
    assert_eq!(summary.outputs, vec![dir.path().join("correlation_results.txt")]);

    // The unanswered gender is reported, the blank reading answer is not
    assert_eq!(summary.encoding.total(), 1);
    assert_eq!(summary.encoding.unrecognized["Gender_Num"]["回答しない"], 1);

    let gender = summary
        .correlations
        .iter()
        .find(|c| c.factor == Factor::Gender)
        .unwrap();
    assert_eq!(gender.correlation.n, 9);

    let nature = &summary.correlations[0];
    assert_eq!(nature.factor, Factor::NatureContact);
    assert!(nature.correlation.r < -0.4);

    assert_eq!(summary.regression.n, 8);
    assert_eq!(summary.regression.coefficients.len(), 5);

    let report = fs::read_to_string(dir.path().join("correlation_results.txt")).unwrap();
    assert!(report.contains("サンプルサイズ: N=10\n"));
    assert!(report.contains("自然接触頻度"));
    assert!(report.contains("居住地域(都市化度)"));
    assert!(!dir.path().join("2_heatmap_correlation.png").exists());
}

fn render_run(input: &Path, out: &Path, font_strategy: FontStrategy) -> insect_survey::RunSummary {
    let cfg = AnalysisConfig {
        render_plots: true,
        font_strategy,
        ..config(input, out)
    };
    completed(pipeline::run(&cfg).unwrap())
}

#[test]
fn test_every_chart_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_survey(dir.path());
    let out = dir.path().join("out");

    let summary = render_run(&input, &out, FontStrategy::Serif);

    let mut expected = vec![out.join("correlation_results.txt")];
    expected.extend(plot::output_file_names().iter().map(|name| out.join(name)));
    assert_eq!(summary.outputs, expected);
    assert_eq!(summary.outputs.len(), 8);
    for path in &summary.outputs {
        assert!(fs::metadata(path).unwrap().len() > 0, "{} is empty", path.display());
    }

    let first: Vec<Vec<u8>> = summary.outputs.iter().map(|p| fs::read(p).unwrap()).collect();
    render_run(&input, &out, FontStrategy::Serif);
    let second: Vec<Vec<u8>> = summary.outputs.iter().map(|p| fs::read(p).unwrap()).collect();
    assert_eq!(first, second);
}

#[test]
fn test_charts_with_japanese_font_strategy() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_survey(dir.path());

    let summary = render_run(&input, dir.path(), FontStrategy::Cjk);
    assert_eq!(summary.outputs.len(), 8);
    for name in plot::output_file_names() {
        assert!(dir.path().join(name).exists(), "{} missing", name);
    }
}

#[test]
fn test_empty_input_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("data.csv");
    fs::write(&input, "").unwrap();
    let out = dir.path().join("out");

    match pipeline::run(&config(&input, &out)).unwrap() {
        RunOutcome::ReadFailed(SurveyError::EmptyInput) => {}
        other => panic!("expected an empty input failure, got {:?}", other),
    }
    assert!(!out.exists());
}

#[test]
fn test_require_complete_items() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_survey(dir.path());
    let mut cfg = config(&input, dir.path());
    cfg.score_policy = insect_survey::ScorePolicy::RequireComplete;

    let summary = completed(pipeline::run(&cfg).unwrap());
    assert_eq!(summary.scored, 9);

    let report = fs::read_to_string(dir.path().join("correlation_results.txt")).unwrap();
    assert!(report.contains("サンプルサイズ: N=9\n"));
}

#[test]
fn test_missing_item_column_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("data.csv");
    let header = HEADER.replace("7. ハエ", "ハエ");
    fs::write(&input, format!("{}\n{}\n", header, ROWS[0])).unwrap();

    let err = pipeline::run(&config(&input, dir.path())).unwrap_err();
    assert!(matches!(err, SurveyError::MissingColumn(ref c) if c == "Q7"));
}
