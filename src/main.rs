// ==========================================
// 企业碳排放计算器 - CLI 主入口
// ==========================================
// 用法:
//   carbon-inventory template [输出路径]       生成上传模板
//   carbon-inventory calc <活动数据文件> [输出目录]  完整核算流程
//   carbon-inventory factors                   列出因子库
// ==========================================

use anyhow::{bail, Context, Result};

use carbon_inventory::app::{get_default_library_path, AppState};
use carbon_inventory::exporter::template::{TemplateGenerator, DEFAULT_TEMPLATE_FILE_NAME};
use carbon_inventory::i18n::{t, t_with_args};
use carbon_inventory::logging;

fn main() -> Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} v{}", carbon_inventory::APP_NAME, carbon_inventory::VERSION);
    tracing::info!("==================================================");

    let mut args = std::env::args().skip(1);
    let command = match args.next() {
        Some(c) => c,
        None => {
            eprintln!("{}", t("cli.usage"));
            bail!("缺少子命令");
        }
    };

    match command.as_str() {
        "template" => {
            let output = args
                .next()
                .unwrap_or_else(|| DEFAULT_TEMPLATE_FILE_NAME.to_string());
            TemplateGenerator
                .write_template(&output)
                .context("模板生成失败")?;
            println!("{}", t_with_args("cli.template_written", &[("path", &output)]));
        }

        "calc" => {
            let input = args.next().context("缺少活动数据文件路径")?;
            let output_dir = args.next().unwrap_or_else(|| ".".to_string());

            let library_path = get_default_library_path();
            tracing::info!("因子库文件: {}", library_path);
            let state = AppState::new(library_path).context("AppState 初始化失败")?;

            let (bundle, stats) = state
                .inventory_api
                .run_pipeline(&input, &output_dir)
                .context("核算流程失败")?;

            println!(
                "{}",
                t_with_args(
                    "cli.match_stats",
                    &[
                        ("total", &stats.total.to_string()),
                        ("matched", &stats.matched.to_string()),
                        ("unmatched", &stats.unmatched.to_string()),
                    ],
                )
            );
            for share in &bundle.scope_shares {
                println!(
                    "  {}: {:.2} tCO2e ({:.2}%)",
                    share.scope.label_zh(),
                    share.tonnes,
                    share.percent
                );
            }
            println!("{}", bundle.headline);
            println!("{}", t_with_args("cli.report_written", &[("dir", &output_dir)]));
        }

        "factors" => {
            let library_path = get_default_library_path();
            let state = AppState::new(library_path).context("AppState 初始化失败")?;

            println!("{}", t("cli.factors_header"));
            for factor in state.factor_api.list_factors()? {
                println!(
                    "  {}  {}  {}  {}",
                    factor.key, factor.factor, factor.unit, factor.gas_type
                );
            }
        }

        other => {
            eprintln!("{}", t("cli.usage"));
            bail!("未知子命令: {}", other);
        }
    }

    Ok(())
}
