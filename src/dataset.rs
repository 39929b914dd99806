//! 稼働データCSVの読み込み
//!
//! 必須列の存在を最初に一度だけ検証し、各行を `PlayRecord` に変換する。
//! 数値列は文字列のまま保持し、抽出対象になった時点で変換する。

use crate::error::{Result, SlotReportError};
use serde::Deserialize;
use slot_report_common::types::columns;
use slot_report_common::{Error, NumericField, PlayRecord};
use std::io::Read;
use std::path::Path;

const BOM: char = '\u{feff}';

/// CSVの1行（列名 → フィールド）
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "機種名（データサイト表記）")]
    site_name: String,
    #[serde(rename = "機種名（正式名）")]
    formal_name: String,
    #[serde(rename = "台番")]
    unit: NumericField,
    #[serde(rename = "G数")]
    games: NumericField,
    #[serde(rename = "BB")]
    big: NumericField,
    #[serde(rename = "RB")]
    reg: NumericField,
    #[serde(rename = "ART")]
    at: NumericField,
    #[serde(rename = "差枚")]
    diff: NumericField,
}

impl CsvRow {
    fn into_record(self, line: usize) -> PlayRecord {
        PlayRecord {
            line,
            site_name: self.site_name.trim().to_string(),
            formal_name: self.formal_name.trim().to_string(),
            unit: self.unit,
            games: self.games,
            big: self.big,
            reg: self.reg,
            at: self.at,
            diff: self.diff,
        }
    }
}

/// CSVファイルを読み込む
pub fn load_dataset(path: &Path) -> Result<Vec<PlayRecord>> {
    if !path.exists() {
        return Err(SlotReportError::FileNotFound(path.display().to_string()));
    }

    let file = std::fs::File::open(path)?;
    let records = parse_dataset(file)?;
    tracing::info!("{}: {}行", path.display(), records.len());
    Ok(records)
}

/// 任意のReaderからCSVを読み込む
pub fn parse_dataset<R: Read>(reader: R) -> Result<Vec<PlayRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers: csv::StringRecord = rdr
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches(BOM).trim())
        .collect();
    validate_headers(&headers)?;
    rdr.set_headers(headers.clone());

    let mut records = Vec::new();
    for result in rdr.records() {
        let row = result?;
        let line = row.position().map(|p| p.line() as usize).unwrap_or(records.len() + 2);
        let parsed: CsvRow = row.deserialize(Some(&headers))?;
        records.push(parsed.into_record(line));
    }

    Ok(records)
}

/// 必須列がすべて揃っているか検証
fn validate_headers(headers: &csv::StringRecord) -> Result<()> {
    let missing: Vec<String> = columns::REQUIRED
        .iter()
        .filter(|&&required| !headers.iter().any(|h| h == required))
        .map(|s| s.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::Schema { missing }.into())
    }
}
