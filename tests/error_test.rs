//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use slot_report::common::{build_report, Error, SelectionRule};
use slot_report::dataset;
use slot_report::error::SlotReportError;
use slot_report::rules;
use std::path::Path;
use tempfile::tempdir;

/// 存在しないCSVを読み込んだ場合
#[test]
fn test_load_nonexistent_csv() {
    let result = dataset::load_dataset(Path::new("/nonexistent/path/12345.csv"));
    assert!(matches!(result, Err(SlotReportError::FileNotFound(_))));
}

/// 必須列が欠けているCSV（行の抽出前に失敗する）
#[test]
fn test_missing_columns_fail_before_extraction() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("broken.csv");
    std::fs::write(&path, "機種名,台番,差枚\nA,1,100\n").unwrap();

    let err = dataset::load_dataset(&path).unwrap_err();
    match err {
        SlotReportError::Common(Error::Schema { missing }) => {
            assert_eq!(missing.len(), 6);
            assert!(missing.contains(&"G数".to_string()));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

/// 抽出対象の数値列が変換できない場合（部分出力しない）
#[test]
fn test_conversion_error_for_qualifying_record() {
    let csv = "機種名（データサイト表記）,機種名（正式名）,台番,G数,BB,RB,ART,差枚\n\
               A,A,1,5000,1,1,1,2000\n\
               A,A,2,不明,1,1,1,3000\n";
    let records = dataset::parse_dataset(csv.as_bytes()).unwrap();

    let err = build_report(&records, &[SelectionRule::new("A", "A", 1000)]).unwrap_err();
    assert_eq!(
        err,
        Error::Conversion { line: 3, column: "G数", value: "不明".to_string() }
    );

    let wrapped: SlotReportError = err.into();
    let display = format!("{}", wrapped);
    assert!(display.contains("line 3"));
}

/// CSVの列数が揃っていない場合
#[test]
fn test_ragged_csv_row() {
    let csv = "機種名（データサイト表記）,機種名（正式名）,台番,G数,BB,RB,ART,差枚\nA,A,1,5000\n";
    let err = dataset::parse_dataset(csv.as_bytes()).unwrap_err();
    assert!(matches!(err, SlotReportError::Csv(_)));
}

/// SlotReportErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        SlotReportError::Config("テスト設定エラー".to_string()),
        SlotReportError::FileNotFound("data.csv".to_string()),
        SlotReportError::Render("描画失敗".to_string()),
        SlotReportError::Prompt("入力中断".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: SlotReportError = io_err.into();

    assert!(matches!(err, SlotReportError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: SlotReportError = json_err.into();

    assert!(matches!(err, SlotReportError::JsonParse(_)));
}

/// 共通エラーは透過的に表示される
#[test]
fn test_common_error_transparent() {
    let err: SlotReportError = Error::Schema { missing: vec!["差枚".to_string()] }.into();
    assert_eq!(format!("{}", err), "Schema error: missing columns [差枚]");
}

/// 空の抽出条件ファイル
#[test]
fn test_empty_rules_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("rules.json");
    std::fs::write(&path, "[]").unwrap();

    let err = rules::load_rules(&path).unwrap_err();
    assert!(matches!(err, SlotReportError::Config(_)));
}
