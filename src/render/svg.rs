//! テーブル・看板のSVG生成

use super::layout::*;
use slot_report_common::{ReportGrid, ReportRow, RowRole, COLUMN_COUNT};
use std::fmt::Write;

pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// font-family属性値（指定フォント → CJKフォント → sans-serif）
fn font_family_attr(family: &str) -> String {
    escape_xml(&format!("'{}', 'Noto Sans CJK JP', sans-serif", family))
}

fn open_svg(out: &mut String, width: f32, height: f32) {
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w:.0}" height="{h:.0}" viewBox="0 0 {w:.0} {h:.0}">"#,
        w = width,
        h = height,
    );
    let _ = write!(
        out,
        r#"<rect x="0" y="0" width="{w:.0}" height="{h:.0}" fill="{bg}"/>"#,
        w = width,
        h = height,
        bg = BACKGROUND_COLOR,
    );
}

#[allow(clippy::too_many_arguments)]
fn push_text(
    out: &mut String,
    x: f32,
    center_y: f32,
    size: f32,
    color: &str,
    bold: bool,
    family: &str,
    text: &str,
) {
    if text.is_empty() {
        return;
    }
    let weight = if bold { r#" font-weight="bold""# } else { "" };
    let _ = write!(
        out,
        r#"<text x="{x:.1}" y="{y:.1}" text-anchor="middle" font-family="{family}" font-size="{size:.1}" fill="{color}"{weight}>{text}</text>"#,
        x = x,
        y = baseline_y(center_y, size),
        family = family,
        size = size,
        color = color,
        weight = weight,
        text = escape_xml(text),
    );
}

#[allow(clippy::too_many_arguments)]
fn push_cells(
    out: &mut String,
    layout: &TableLayout,
    row: &ReportRow,
    y: f32,
    height: f32,
    fill: &str,
    text_color: &str,
    bold: bool,
    family: &str,
) {
    let size = layout.font_size(&row.role);
    for column in 0..COLUMN_COUNT {
        let x = layout.column_x(column);
        let w = layout.column_width(column);
        let _ = write!(
            out,
            r#"<rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" fill="{fill}" stroke="{stroke}" stroke-width="{sw:.1}"/>"#,
            x = x,
            y = y,
            w = w,
            h = height,
            fill = fill,
            stroke = BORDER_COLOR,
            sw = layout.border_width(),
        );
        push_text(out, x + w / 2.0, y + height / 2.0, size, text_color, bold, family, &row.cells[column]);
    }
}

/// テーブル部分のSVG
///
/// 行の役割ごとに描画を切り替える:
/// - Padding / Separator: 細い余白（罫線なし）
/// - Headline: 赤帯 + 「{表示名} 優秀台」
/// - Header: 黒帯 + 白太字
/// - Data: 偶数行は灰色、奇数行は白
pub fn table_svg(grid: &ReportGrid, layout: &TableLayout, font_family: &str) -> String {
    let family = font_family_attr(font_family);
    let height = layout.table_height(grid.rows().iter().map(|r| &r.role));

    let mut out = String::new();
    open_svg(&mut out, layout.width, height);

    let mut y = layout.margin();
    for (index, row) in grid.rows().iter().enumerate() {
        let h = layout.row_height(&row.role);
        match &row.role {
            RowRole::Padding | RowRole::Separator => {}
            RowRole::Headline(name) => {
                let _ = write!(
                    out,
                    r#"<rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" fill="{c}" stroke="{c}" stroke-width="{sw:.1}"/>"#,
                    x = layout.margin(),
                    y = y,
                    w = layout.content_width(),
                    h = h,
                    c = HEADLINE_COLOR,
                    sw = layout.border_width(),
                );
                push_text(
                    &mut out,
                    layout.width / 2.0,
                    y + h / 2.0,
                    layout.font_size(&row.role),
                    HEADLINE_TEXT_COLOR,
                    true,
                    &family,
                    &format!("{} {}", name, HEADLINE_SUFFIX),
                );
            }
            RowRole::Header => {
                push_cells(&mut out, layout, row, y, h, HEADER_COLOR, HEADER_TEXT_COLOR, true, &family);
            }
            RowRole::Data => {
                let fill = if index % 2 == 0 { STRIPE_COLOR } else { BACKGROUND_COLOR };
                push_cells(&mut out, layout, row, y, h, fill, DATA_TEXT_COLOR, false, &family);
            }
        }
        y += h;
    }

    out.push_str("</svg>");
    out
}

/// 看板部分のSVG（赤背景に白文字のタイトル）
pub fn banner_svg(title: &str, width: u32, height: u32, font_family: &str) -> String {
    let family = font_family_attr(font_family);
    let (w, h) = (width as f32, height as f32);
    let scale = w / BASE_WIDTH_PX;

    let mut out = String::new();
    open_svg(&mut out, w, h);
    let _ = write!(
        out,
        r#"<rect x="0" y="0" width="{w:.0}" height="{h:.0}" fill="{c}"/>"#,
        w = w,
        h = h,
        c = BANNER_COLOR,
    );
    push_text(
        &mut out,
        w / 2.0,
        h / 2.0 - BANNER_TEXT_LIFT_PX * scale,
        BANNER_FONT_PX * scale,
        BANNER_TEXT_COLOR,
        false,
        &family,
        title,
    );
    out.push_str("</svg>");
    out
}
