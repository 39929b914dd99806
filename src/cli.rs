use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "slot-report")]
#[command(about = "スロット優秀台レポート画像生成ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// CSVから優秀台レポート画像を生成
    Render {
        /// 稼働データCSVファイル
        #[arg(long, required = true)]
        csv: PathBuf,

        /// 抽出条件JSONファイル（省略時は対話入力）
        #[arg(short, long)]
        rules: Option<PathBuf>,

        /// 看板のタイトル（省略時は対話入力）
        #[arg(short, long)]
        title: Option<String>,

        /// 出力PNGファイル（デフォルト: 設定の default_output）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 対話入力した抽出条件をJSONに保存
        #[arg(long)]
        save_rules: Option<PathBuf>,

        /// 画像を生成せずテーブル内容を表示
        #[arg(long)]
        dry_run: bool,
    },

    /// 抽出結果をテキストで表示
    Preview {
        /// 稼働データCSVファイル
        #[arg(long, required = true)]
        csv: PathBuf,

        /// 抽出条件JSONファイル
        #[arg(short, long, required = true)]
        rules: PathBuf,
    },

    /// 設定を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// 描画フォント名を設定
        #[arg(long)]
        set_font_family: Option<String>,

        /// 追加フォントディレクトリを設定
        #[arg(long)]
        set_font_dir: Option<PathBuf>,
    },
}
