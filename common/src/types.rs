//! データ型定義
//!
//! - PlayRecord: CSVの1行（1台分の稼働データ）
//! - SelectionRule: 抽出条件（機種名・表示名・差枚しきい値）
//! - ReportRow / RowRole: 出力テーブルの1行と、その描画上の役割

use crate::error::{Error, Result};
use crate::number::parse_integer;
use serde::{Deserialize, Serialize};

/// 入力CSVの列名
pub mod columns {
    pub const SITE_NAME: &str = "機種名（データサイト表記）";
    pub const FORMAL_NAME: &str = "機種名（正式名）";
    pub const UNIT: &str = "台番";
    pub const GAMES: &str = "G数";
    pub const BIG: &str = "BB";
    pub const REG: &str = "RB";
    pub const AT: &str = "ART";
    pub const DIFF: &str = "差枚";

    /// 必須列（この順でエラー表示する）
    pub const REQUIRED: [&str; 8] = [SITE_NAME, FORMAL_NAME, UNIT, GAMES, BIG, REG, AT, DIFF];
}

/// 出力テーブルの列数
pub const COLUMN_COUNT: usize = 7;

/// 列見出し
pub const HEADER_LABELS: [&str; COLUMN_COUNT] =
    ["台番", "機種名", "ゲーム数", "BIG", "REG", "AT", "差枚数"];

/// 未変換の数値セル
///
/// 抽出対象になったレコードだけを変換するため、CSVの文字列のまま保持する。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NumericField(pub String);

impl NumericField {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn raw(&self) -> &str {
        &self.0
    }

    /// 整数に変換（失敗時は行番号・列名つきのConversionエラー）
    pub fn to_integer(&self, line: usize, column: &'static str) -> Result<i64> {
        parse_integer(&self.0).ok_or_else(|| Error::Conversion {
            line,
            column,
            value: self.0.clone(),
        })
    }
}

impl From<i64> for NumericField {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

/// 1台分の稼働データ
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayRecord {
    /// CSV上の行番号（ヘッダー行 = 1）
    pub line: usize,
    pub site_name: String,
    pub formal_name: String,
    pub unit: NumericField,
    pub games: NumericField,
    pub big: NumericField,
    pub reg: NumericField,
    pub at: NumericField,
    pub diff: NumericField,
}

impl PlayRecord {
    /// 機種名（サイト表記・正式名のどちらか）が一致するか
    pub fn matches(&self, key: &str) -> bool {
        self.site_name == key || self.formal_name == key
    }

    pub fn unit_number(&self) -> Result<i64> {
        self.unit.to_integer(self.line, columns::UNIT)
    }

    pub fn game_count(&self) -> Result<i64> {
        self.games.to_integer(self.line, columns::GAMES)
    }

    pub fn big_count(&self) -> Result<i64> {
        self.big.to_integer(self.line, columns::BIG)
    }

    pub fn reg_count(&self) -> Result<i64> {
        self.reg.to_integer(self.line, columns::REG)
    }

    pub fn at_count(&self) -> Result<i64> {
        self.at.to_integer(self.line, columns::AT)
    }

    pub fn differential(&self) -> Result<i64> {
        self.diff.to_integer(self.line, columns::DIFF)
    }
}

/// 抽出条件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionRule {
    /// CSV内の機種名（サイト表記・正式名のどちらでも可）
    pub match_key: String,
    /// 画像に表示する名前
    #[serde(default)]
    pub display_name: String,
    /// 差枚のしきい値（以上）
    pub threshold: u32,
}

impl SelectionRule {
    pub fn new(match_key: impl Into<String>, display_name: impl Into<String>, threshold: u32) -> Self {
        Self {
            match_key: match_key.into(),
            display_name: display_name.into(),
            threshold,
        }
    }

    /// 表示名（未設定なら機種名）
    pub fn label(&self) -> &str {
        if self.display_name.trim().is_empty() {
            &self.match_key
        } else {
            &self.display_name
        }
    }
}

/// 行の役割
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowRole {
    /// 画像最上部の余白
    Padding,
    /// 機種見出し（セルは空、表示名をタグに持つ）
    Headline(String),
    /// 列見出し
    Header,
    /// データ行
    Data,
    /// 機種間の区切り
    Separator,
}

impl RowRole {
    /// 罫線・高さを持たない細線行か
    pub fn is_spacer(&self) -> bool {
        matches!(self, RowRole::Padding | RowRole::Separator)
    }
}

/// 出力テーブルの1行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub role: RowRole,
    pub cells: [String; COLUMN_COUNT],
}

impl ReportRow {
    fn blank(role: RowRole) -> Self {
        Self {
            role,
            cells: Default::default(),
        }
    }

    pub fn padding() -> Self {
        Self::blank(RowRole::Padding)
    }

    pub fn separator() -> Self {
        Self::blank(RowRole::Separator)
    }

    pub fn headline(display_name: impl Into<String>) -> Self {
        Self::blank(RowRole::Headline(display_name.into()))
    }

    pub fn header() -> Self {
        Self {
            role: RowRole::Header,
            cells: HEADER_LABELS.map(String::from),
        }
    }

    pub fn data(cells: [String; COLUMN_COUNT]) -> Self {
        Self {
            role: RowRole::Data,
            cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(site: &str, formal: &str) -> PlayRecord {
        PlayRecord {
            line: 2,
            site_name: site.to_string(),
            formal_name: formal.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_matches_either_name() {
        let r = record("北斗転生2", "L北斗 転生の章2");
        assert!(r.matches("北斗転生2"));
        assert!(r.matches("L北斗 転生の章2"));
        assert!(!r.matches("北斗"));
    }

    #[test]
    fn test_numeric_field_conversion_error() {
        let r = PlayRecord {
            line: 7,
            games: NumericField::new("---"),
            ..Default::default()
        };
        let err = r.game_count().unwrap_err();
        assert_eq!(
            err,
            Error::Conversion { line: 7, column: "G数", value: "---".to_string() }
        );
    }

    #[test]
    fn test_numeric_field_from_i64() {
        let field = NumericField::from(-350);
        assert_eq!(field.raw(), "-350");
        assert_eq!(field.to_integer(1, columns::DIFF).unwrap(), -350);
    }

    #[test]
    fn test_header_row_labels() {
        let row = ReportRow::header();
        assert_eq!(row.role, RowRole::Header);
        assert_eq!(row.cells[0], "台番");
        assert_eq!(row.cells[6], "差枚数");
    }

    #[test]
    fn test_blank_rows() {
        assert!(ReportRow::padding().cells.iter().all(|c| c.is_empty()));
        assert!(ReportRow::separator().role.is_spacer());
        let headline = ReportRow::headline("北斗");
        assert_eq!(headline.role, RowRole::Headline("北斗".to_string()));
        assert!(headline.cells.iter().all(|c| c.is_empty()));
        assert!(!headline.role.is_spacer());
    }

    #[test]
    fn test_rule_deserialize_defaults() {
        let json = r#"{"matchKey": "Lスマスロ北斗の拳", "threshold": 2000}"#;
        let rule: SelectionRule = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(rule.match_key, "Lスマスロ北斗の拳");
        assert_eq!(rule.display_name, "");
        assert_eq!(rule.label(), "Lスマスロ北斗の拳");
    }

    #[test]
    fn test_rule_serialize_camel_case() {
        let rule = SelectionRule::new("L北斗 転生の章2", "北斗転生", 1000);
        let json = serde_json::to_string(&rule).expect("シリアライズ失敗");
        assert!(json.contains("\"matchKey\":\"L北斗 転生の章2\""));
        assert!(json.contains("\"displayName\":\"北斗転生\""));
        assert!(json.contains("\"threshold\":1000"));
    }

    #[test]
    fn test_rule_negative_threshold_rejected() {
        let json = r#"{"matchKey": "A", "threshold": -5}"#;
        assert!(serde_json::from_str::<SelectionRule>(json).is_err());
    }
}
