//! 抽出条件ファイル（JSON）の読み書き
//!
//! ```json
//! [
//!   {"matchKey": "L北斗 転生の章2", "displayName": "北斗転生", "threshold": 1000},
//!   {"matchKey": "Lスマスロ北斗の拳", "threshold": 2000}
//! ]
//! ```

use crate::error::{Result, SlotReportError};
use crate::prompt::make_rule;
use slot_report_common::SelectionRule;
use std::path::Path;

/// 抽出条件ファイルを読み込む
///
/// `displayName` 省略時は `matchKey` を表示名にする。
/// 機種名・表示名の前後の空白は取り除く（CSV側と同じ扱い）。
pub fn load_rules(path: &Path) -> Result<Vec<SelectionRule>> {
    if !path.exists() {
        return Err(SlotReportError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    parse_rules(&content)
}

pub fn parse_rules(content: &str) -> Result<Vec<SelectionRule>> {
    let rules: Vec<SelectionRule> = serde_json::from_str(content)?;
    validate_rules(&rules)?;

    Ok(rules
        .iter()
        .map(|r| make_rule(&r.match_key, &r.display_name, r.threshold))
        .collect())
}

/// 抽出条件を保存（次回 `--rules` で再利用できる）
pub fn save_rules(path: &Path, rules: &[SelectionRule]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(rules)?;
    std::fs::write(path, json)?;
    Ok(())
}

pub fn validate_rules(rules: &[SelectionRule]) -> Result<()> {
    if rules.is_empty() {
        return Err(SlotReportError::Config("機種が1つも指定されていません".into()));
    }

    if let Some(pos) = rules.iter().position(|r| r.match_key.trim().is_empty()) {
        return Err(SlotReportError::Config(format!(
            "{}機種目の機種名が空です",
            pos + 1
        )));
    }

    Ok(())
}
