//! 対話式の条件入力
//!
//! STEP 3〜8: 看板タイトル → 機種名 → 表示名 → しきい値 → 次の機種の有無

use crate::error::{Result, SlotReportError};
use dialoguer::{Confirm, Input};
use slot_report_common::SelectionRule;

/// 入力値から抽出条件を作る（表示名が空なら機種名を使う）
pub fn make_rule(csv_name: &str, display_name: &str, threshold: u32) -> SelectionRule {
    let csv_name = csv_name.trim();
    let display_name = match display_name.trim() {
        "" => csv_name,
        name => name,
    };
    SelectionRule::new(csv_name, display_name, threshold)
}

/// 看板タイトルを入力
pub fn prompt_title() -> Result<String> {
    println!("--- STEP 3 & 4: 看板の設定 ---");
    let title: String = Input::new()
        .with_prompt("看板内の文字（メインタイトル）")
        .interact_text()
        .map_err(|e| SlotReportError::Prompt(e.to_string()))?;
    Ok(title.trim().to_string())
}

/// 看板タイトルを決定（`--dry-run` では画像を作らないので入力を求めない）
pub fn resolve_title(title: Option<String>, dry_run: bool) -> Result<String> {
    match title {
        Some(title) => Ok(title),
        None if dry_run => Ok(String::new()),
        None => prompt_title(),
    }
}

/// 機種ごとの抽出条件を対話的に入力
pub fn prompt_rules() -> Result<Vec<SelectionRule>> {
    let mut rules = Vec::new();

    loop {
        println!("\n--- STEP 5 & 6: 機種の設定 ({}機種目) ---", rules.len() + 1);
        let csv_name: String = Input::new()
            .with_prompt("CSV内の正確な機種名")
            .validate_with(|s: &String| {
                if s.trim().is_empty() {
                    Err("機種名を入力してください")
                } else {
                    Ok(())
                }
            })
            .interact_text()
            .map_err(|e| SlotReportError::Prompt(e.to_string()))?;

        let display_name: String = Input::new()
            .with_prompt("画像の見出しに表示する名前")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| SlotReportError::Prompt(e.to_string()))?;

        println!("\n--- STEP 7: 枚数の設定 ---");
        let label = if display_name.trim().is_empty() { csv_name.trim() } else { display_name.trim() };
        let threshold: u32 = Input::new()
            .with_prompt(format!("「{}」は何枚以上の台を取得しますか？(数値のみ)", label))
            .interact_text()
            .map_err(|e| SlotReportError::Prompt(e.to_string()))?;

        let rule = make_rule(&csv_name, &display_name, threshold);
        tracing::debug!("条件追加: {:?}", rule);
        rules.push(rule);

        println!("\n--- STEP 8: 次の機種 ---");
        let more = Confirm::new()
            .with_prompt("次の機種はありますか？")
            .default(false)
            .interact()
            .map_err(|e| SlotReportError::Prompt(e.to_string()))?;
        if !more {
            break;
        }
    }

    Ok(rules)
}
