//! 優秀台テーブルの組み立て
//!
//! データセットと抽出条件のリストから、描画用のテーブル（行の並び + 役割）を作る。
//! I/Oを持たない純粋関数のみ。
//!
//! テーブル構成:
//! ```text
//! Padding                 ← 画像最上部の余白
//! Headline(表示名)        ← 機種見出し
//! Header                  ← 列見出し
//! Data × k                ← 台番昇順
//! Separator               ← 次の機種がある場合のみ
//! Headline(表示名)
//! ...
//! ```

use crate::error::Result;
use crate::number::{format_diff, format_games};
use crate::types::{PlayRecord, ReportRow, RowRole, SelectionRule};
use rayon::prelude::*;

/// 変換済みの抽出レコード
struct QualifiedRecord {
    unit: i64,
    games: i64,
    big: i64,
    reg: i64,
    at: i64,
    diff: i64,
}

impl QualifiedRecord {
    fn convert(record: &PlayRecord, diff: i64) -> Result<Self> {
        Ok(Self {
            unit: record.unit_number()?,
            games: record.game_count()?,
            big: record.big_count()?,
            reg: record.reg_count()?,
            at: record.at_count()?,
            diff,
        })
    }

    fn to_row(&self, display_name: &str) -> ReportRow {
        ReportRow::data([
            self.unit.to_string(),
            display_name.to_string(),
            format_games(self.games),
            self.big.to_string(),
            self.reg.to_string(),
            self.at.to_string(),
            format_diff(self.diff),
        ])
    }
}

/// 1機種分のセクションを抽出
///
/// 機種名（サイト表記 or 正式名）が一致し、差枚がしきい値以上のレコードを台番昇順で並べる。
/// 該当なしの場合は空のVecを返す（見出しも列見出しも出さない）。
///
/// 返す行: 見出し行 + 列見出し行 + データ行 × 該当件数
pub fn extract_section(records: &[PlayRecord], rule: &SelectionRule) -> Result<Vec<ReportRow>> {
    let mut qualified = Vec::new();
    for record in records.iter().filter(|r| r.matches(&rule.match_key)) {
        let diff = record.differential()?;
        if diff >= i64::from(rule.threshold) {
            qualified.push(QualifiedRecord::convert(record, diff)?);
        }
    }

    if qualified.is_empty() {
        return Ok(Vec::new());
    }

    // 安定ソート: 同じ台番はCSVの順序を保つ
    qualified.sort_by_key(|r| r.unit);

    let display_name = rule.label();
    let mut rows = Vec::with_capacity(qualified.len() + 2);
    rows.push(ReportRow::headline(display_name));
    rows.push(ReportRow::header());
    rows.extend(qualified.iter().map(|r| r.to_row(display_name)));
    Ok(rows)
}

/// 描画用テーブル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportGrid {
    rows: Vec<ReportRow>,
    headline_indices: Vec<usize>,
    header_indices: Vec<usize>,
    separator_indices: Vec<usize>,
    display_names: Vec<String>,
}

impl ReportGrid {
    /// 最上部の余白行だけのテーブル
    fn with_padding() -> Self {
        Self {
            rows: vec![ReportRow::padding()],
            headline_indices: Vec::new(),
            header_indices: Vec::new(),
            separator_indices: Vec::new(),
            display_names: Vec::new(),
        }
    }

    fn push_section(&mut self, rows: Vec<ReportRow>) {
        if !self.headline_indices.is_empty() {
            self.separator_indices.push(self.rows.len());
            self.rows.push(ReportRow::separator());
        }

        let headline = self.rows.len();
        if let Some(RowRole::Headline(name)) = rows.first().map(|r| &r.role) {
            self.display_names.push(name.clone());
        }
        self.headline_indices.push(headline);
        self.header_indices.push(headline + 1);
        self.rows.extend(rows);
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn headline_indices(&self) -> &[usize] {
        &self.headline_indices
    }

    pub fn header_indices(&self) -> &[usize] {
        &self.header_indices
    }

    pub fn separator_indices(&self) -> &[usize] {
        &self.separator_indices
    }

    /// セクションごとの表示名（見出しと同じ順）
    pub fn display_names(&self) -> &[String] {
        &self.display_names
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// 余白行が常に入るため、`build_report` の結果は空にならない
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 1機種以上が出力対象になったか
    pub fn has_sections(&self) -> bool {
        !self.headline_indices.is_empty()
    }

    pub fn section_count(&self) -> usize {
        self.headline_indices.len()
    }

    pub fn data_row_count(&self) -> usize {
        self.rows.iter().filter(|r| r.role == RowRole::Data).count()
    }
}

/// データセットと抽出条件からテーブル全体を組み立てる
///
/// 各条件のセクション抽出は並列に行い、条件の順序で連結する。
/// 該当なしの条件は何も出力せず、インデックスも進めない。
/// 区切り行はセクション間にのみ入り、最後のセクションの後には付かない。
pub fn build_report(records: &[PlayRecord], rules: &[SelectionRule]) -> Result<ReportGrid> {
    let sections: Vec<Result<Vec<ReportRow>>> = rules
        .par_iter()
        .map(|rule| extract_section(records, rule))
        .collect();

    let mut grid = ReportGrid::with_padding();
    for (rule, section) in rules.iter().zip(sections) {
        let rows = section?;
        if rows.is_empty() {
            tracing::debug!("該当なし: {} (>= {})", rule.match_key, rule.threshold);
            continue;
        }
        tracing::debug!("{}: {}台", rule.label(), rows.len() - 2);
        grid.push_section(rows);
    }

    Ok(grid)
}
