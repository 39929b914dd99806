//! スロット優秀台レポート画像生成ツール
//!
//! 稼働データCSVから機種ごとに差枚しきい値以上の台を抽出し、
//! 看板付きの表画像（PNG）を生成する。

pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod preview;
pub mod prompt;
pub mod render;
pub mod rules;

pub use slot_report_common as common;
