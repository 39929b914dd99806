//! テーブルのテキストプレビュー（画像を生成せずに内容を確認する）

use slot_report_common::{ReportGrid, RowRole};

fn role_label(role: &RowRole) -> &'static str {
    match role {
        RowRole::Padding => "余白",
        RowRole::Headline(_) => "見出し",
        RowRole::Header => "列名",
        RowRole::Data => "データ",
        RowRole::Separator => "区切り",
    }
}

/// 1行1レコードのテキストに整形
pub fn format_grid(grid: &ReportGrid) -> String {
    let mut out = String::new();
    for (index, row) in grid.rows().iter().enumerate() {
        let body = match &row.role {
            RowRole::Headline(name) => format!("{} 優秀台", name),
            RowRole::Header | RowRole::Data => row.cells.join(" | "),
            RowRole::Padding | RowRole::Separator => String::new(),
        };
        out.push_str(&format!("{:>4} [{}] {}", index, role_label(&row.role), body).trim_end());
        out.push('\n');
    }
    out
}
