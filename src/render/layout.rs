//! レイアウト設定モジュール
//!
//! px基準のテーブル・看板レイアウト定義。
//! 基準幅 2400px（16インチ × 150dpi）に対する値を持ち、実際の幅に合わせて拡縮する。

use slot_report_common::{RowRole, COLUMN_COUNT};

// ============================================
// 基準寸法（px, 幅2400px時）
// ============================================

/// 基準テーブル幅
pub const BASE_WIDTH_PX: f32 = 2400.0;

/// 外周余白
pub const MARGIN_PX: f32 = 24.0;

/// 行の高さ
pub const SPACER_ROW_HEIGHT_PX: f32 = 6.0;
pub const HEADLINE_ROW_HEIGHT_PX: f32 = 120.0;
pub const HEADER_ROW_HEIGHT_PX: f32 = 84.0;
pub const DATA_ROW_HEIGHT_PX: f32 = 84.0;

/// 文字サイズ（pt × 150/72）
pub const HEADLINE_FONT_PX: f32 = 58.0;
pub const HEADER_FONT_PX: f32 = 42.0;
pub const DATA_FONT_PX: f32 = 38.0;

/// 看板タイトル文字サイズ
pub const BANNER_FONT_PX: f32 = 90.0;
/// 看板タイトルの上方向オフセット
pub const BANNER_TEXT_LIFT_PX: f32 = 10.0;

/// 罫線の太さ
pub const BORDER_WIDTH_PX: f32 = 1.5;

/// ベースライン補正（文字サイズに対する比率）
pub const BASELINE_RATIO: f32 = 0.35;

/// 列幅比率（台番, 機種名, ゲーム数, BIG, REG, AT, 差枚数）
pub const COLUMN_RATIOS: [f32; COLUMN_COUNT] = [0.10, 0.20, 0.15, 0.10, 0.10, 0.10, 0.25];

// ============================================
// 配色
// ============================================

pub const BACKGROUND_COLOR: &str = "#FFFFFF";
pub const BANNER_COLOR: &str = "#FF0000";
pub const BANNER_TEXT_COLOR: &str = "#FFFFFF";
pub const HEADLINE_COLOR: &str = "#FF4B4B";
pub const HEADLINE_TEXT_COLOR: &str = "#000000";
pub const HEADER_COLOR: &str = "#444444";
pub const HEADER_TEXT_COLOR: &str = "#FFFFFF";
pub const STRIPE_COLOR: &str = "#F2F2F2";
pub const DATA_TEXT_COLOR: &str = "#000000";
pub const BORDER_COLOR: &str = "#000000";

/// 見出しの接尾辞
pub const HEADLINE_SUFFIX: &str = "優秀台";

// ============================================
// レイアウト構造体
// ============================================

/// テーブルのレイアウト（幅に応じた拡縮済み）
#[derive(Debug, Clone, Copy)]
pub struct TableLayout {
    /// 画像幅（px）
    pub width: f32,
    /// 基準幅に対する倍率
    pub scale: f32,
}

impl TableLayout {
    pub fn new(width: u32) -> Self {
        let width = width.max(1) as f32;
        Self {
            width,
            scale: width / BASE_WIDTH_PX,
        }
    }

    pub fn margin(&self) -> f32 {
        MARGIN_PX * self.scale
    }

    /// 罫線内側の幅
    pub fn content_width(&self) -> f32 {
        self.width - self.margin() * 2.0
    }

    pub fn row_height(&self, role: &RowRole) -> f32 {
        let base = match role {
            role if role.is_spacer() => SPACER_ROW_HEIGHT_PX,
            RowRole::Headline(_) => HEADLINE_ROW_HEIGHT_PX,
            RowRole::Header => HEADER_ROW_HEIGHT_PX,
            _ => DATA_ROW_HEIGHT_PX,
        };
        base * self.scale
    }

    pub fn font_size(&self, role: &RowRole) -> f32 {
        let base = match role {
            RowRole::Headline(_) => HEADLINE_FONT_PX,
            RowRole::Header => HEADER_FONT_PX,
            _ => DATA_FONT_PX,
        };
        base * self.scale
    }

    pub fn border_width(&self) -> f32 {
        (BORDER_WIDTH_PX * self.scale).max(1.0)
    }

    /// 列の左端X座標
    pub fn column_x(&self, column: usize) -> f32 {
        let ratio: f32 = COLUMN_RATIOS[..column].iter().sum();
        self.margin() + self.content_width() * ratio
    }

    pub fn column_width(&self, column: usize) -> f32 {
        self.content_width() * COLUMN_RATIOS[column]
    }

    /// 全行を並べた画像の高さ
    pub fn table_height<'a>(&self, roles: impl IntoIterator<Item = &'a RowRole>) -> f32 {
        let rows: f32 = roles.into_iter().map(|r| self.row_height(r)).sum();
        rows + self.margin() * 2.0
    }
}

// ============================================
// ヘルパー関数
// ============================================

/// 中央揃えテキストのベースラインY座標
#[inline]
pub fn baseline_y(center_y: f32, font_size: f32) -> f32 {
    center_y + font_size * BASELINE_RATIO
}
