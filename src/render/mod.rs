//! レポート画像の生成
//!
//! テーブルと看板をそれぞれSVGで組み立ててresvgでラスタライズし、
//! 看板を上にして1枚のPNGに結合する。

pub mod layout;
pub mod svg;

use crate::config::Config;
use crate::error::{Result, SlotReportError};
use image::{imageops, DynamicImage, ImageFormat, Rgb, RgbImage, RgbaImage};
use layout::TableLayout;
use resvg::tiny_skia;
use resvg::usvg::{self, fontdb};
use slot_report_common::ReportGrid;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const DEFAULT_FILE_NAME: &str = "final_report.png";

/// 描画設定
#[derive(Debug, Clone)]
pub struct ReportStyle {
    pub font_family: String,
    pub font_dir: Option<PathBuf>,
    pub banner_height: u32,
    pub table_width: u32,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for ReportStyle {
    fn from(config: &Config) -> Self {
        Self {
            font_family: config.font_family.clone(),
            font_dir: config.font_dir.clone(),
            banner_height: config.banner_height,
            table_width: config.table_width,
        }
    }
}

/// 出力結果
#[derive(Debug, Clone)]
pub struct RenderSummary {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// 出力先パスを決定（ディレクトリ指定時は final_report.png、拡張子なしは .png を付与）
pub fn output_path(output: &Path) -> PathBuf {
    if output.is_dir() {
        output.join(DEFAULT_FILE_NAME)
    } else if output.extension().is_none() {
        output.with_extension("png")
    } else {
        output.to_path_buf()
    }
}

fn load_fonts(style: &ReportStyle) -> Arc<fontdb::Database> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();
    if let Some(dir) = &style.font_dir {
        db.load_fonts_dir(dir);
    }
    db.set_sans_serif_family(style.font_family.clone());

    if db.is_empty() {
        tracing::warn!("フォントが見つかりません。文字が描画されない可能性があります");
    } else {
        tracing::debug!("{}個のフォントを読み込み", db.len());
    }
    Arc::new(db)
}

/// SVGをRGB画像にラスタライズ
fn rasterize(svg: &str, fonts: &Arc<fontdb::Database>, style: &ReportStyle) -> Result<RgbImage> {
    let mut options = usvg::Options::default();
    options.font_family = style.font_family.clone();
    options.fontdb = Arc::clone(fonts);

    let tree = usvg::Tree::from_str(svg, &options)
        .map_err(|e| SlotReportError::Render(format!("SVG解析エラー: {}", e)))?;

    let size = tree.size();
    let width = size.width().ceil() as u32;
    let height = size.height().ceil() as u32;

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| SlotReportError::Render(format!("画像サイズが不正: {}x{}", width, height)))?;
    // 全面不透明なので premultiplied = straight alpha
    pixmap.fill(tiny_skia::Color::WHITE);
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    let rgba = RgbaImage::from_raw(width, height, pixmap.take())
        .ok_or_else(|| SlotReportError::Render("ピクセルデータの変換に失敗".into()))?;
    Ok(DynamicImage::ImageRgba8(rgba).to_rgb8())
}

/// レポート画像をメモリ上に生成（看板 + テーブル）
pub fn render_report_image(grid: &ReportGrid, title: &str, style: &ReportStyle) -> Result<RgbImage> {
    let fonts = load_fonts(style);
    let layout = TableLayout::new(style.table_width);

    let table = rasterize(&svg::table_svg(grid, &layout, &style.font_family), &fonts, style)?;
    let banner = rasterize(
        &svg::banner_svg(title, table.width(), style.banner_height, &style.font_family),
        &fonts,
        style,
    )?;

    let mut report = RgbImage::from_pixel(
        table.width(),
        banner.height() + table.height(),
        Rgb([255, 255, 255]),
    );
    imageops::replace(&mut report, &banner, 0, 0);
    imageops::replace(&mut report, &table, 0, i64::from(banner.height()));

    tracing::debug!("画像サイズ: {}x{}", report.width(), report.height());
    Ok(report)
}

/// レポート画像をPNGとして保存
pub fn render_report(
    grid: &ReportGrid,
    title: &str,
    style: &ReportStyle,
    output: &Path,
) -> Result<RenderSummary> {
    let path = output_path(output);
    let report = render_report_image(grid, title, style)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    report
        .save_with_format(&path, ImageFormat::Png)
        .map_err(|e| SlotReportError::Render(format!("PNG保存エラー: {}", e)))?;

    Ok(RenderSummary {
        width: report.width(),
        height: report.height(),
        path,
    })
}
