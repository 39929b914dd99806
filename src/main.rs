use clap::Parser;
use slot_report::{cli, config, dataset, error, preview, prompt, render, rules};
use slot_report::common::build_report;
use cli::{Cli, Commands};
use config::Config;
use error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load()?;

    match cli.command {
        Commands::Render { csv, rules: rules_path, title, output, save_rules, dry_run } => {
            println!("🎰 slot-report - 優秀台レポート生成\n");

            // 1. CSV読み込み
            println!("[1/4] CSVを読み込み中...");
            let records = dataset::load_dataset(&csv)?;
            println!("✔ {}行を読み込み\n", records.len());

            // 2. 看板・抽出条件
            println!("[2/4] 抽出条件を設定中...");
            let title = prompt::resolve_title(title, dry_run)?;
            let selection = match rules_path {
                Some(path) => rules::load_rules(&path)?,
                None => prompt::prompt_rules()?,
            };
            rules::validate_rules(&selection)?;
            if let Some(path) = save_rules {
                rules::save_rules(&path, &selection)?;
                println!("- 抽出条件を保存: {}", path.display());
            }
            println!("✔ {}機種\n", selection.len());

            // 3. テーブル作成
            println!("[3/4] テーブルを作成中...");
            let grid = build_report(&records, &selection)?;
            if !grid.has_sections() {
                println!("⚠ しきい値を満たす台がありませんでした");
            }
            println!("✔ {}機種 / {}台\n", grid.section_count(), grid.data_row_count());

            if dry_run {
                print!("{}", preview::format_grid(&grid));
                return Ok(());
            }

            // 4. 画像生成
            println!("[4/4] 画像を生成中...");
            let output = output.unwrap_or_else(|| config.default_output.clone());
            let style = render::ReportStyle::from(&config);
            let summary = render::render_report(&grid, &title, &style, &output)?;
            println!(
                "✔ 画像を保存: {} ({}x{})",
                summary.path.display(),
                summary.width,
                summary.height
            );

            println!("\n✅ 完了");
        }

        Commands::Preview { csv, rules: rules_path } => {
            let records = dataset::load_dataset(&csv)?;
            let selection = rules::load_rules(&rules_path)?;
            let grid = build_report(&records, &selection)?;

            print!("{}", preview::format_grid(&grid));
            println!("\n{}機種 / {}台", grid.section_count(), grid.data_row_count());
        }

        Commands::Config { show, set_font_family, set_font_dir } => {
            let mut config = config;

            if let Some(family) = set_font_family {
                config.set_font_family(family)?;
                println!("✔ フォントを設定しました");
            }

            if let Some(dir) = set_font_dir {
                config.set_font_dir(dir)?;
                println!("✔ フォントディレクトリを設定しました");
            }

            if show {
                println!("設定:");
                println!("  フォント: {}", config.font_family);
                println!(
                    "  フォントディレクトリ: {}",
                    config.font_dir.as_ref().map(|d| d.display().to_string()).unwrap_or_else(|| "未設定".into())
                );
                println!("  出力先: {}", config.default_output.display());
                println!("  看板の高さ: {}px", config.banner_height);
                println!("  テーブル幅: {}px", config.table_width);
            }
        }
    }

    Ok(())
}
