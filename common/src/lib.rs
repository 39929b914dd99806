//! Slot Report Common Library
//!
//! CLIと描画処理で共有される型と、優秀台テーブルの組み立てロジック

pub mod types;
pub mod error;
pub mod number;
pub mod report;

pub use types::{NumericField, PlayRecord, ReportRow, RowRole, SelectionRule, COLUMN_COUNT, HEADER_LABELS};
pub use error::{Error, Result};
pub use number::{format_diff, format_games, format_grouped, parse_integer};
pub use report::{build_report, extract_section, ReportGrid};
