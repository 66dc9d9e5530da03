// ==========================================
// 管板加工报价系统 - 命令行入口
// ==========================================
// 用法: tube-plate-quote <单价表文件.xlsx|.csv> [数据库路径]
// 职责: 导入单价表并打印导入报告（JSON）
// ==========================================

use anyhow::{bail, Context, Result};
use std::sync::Arc;
use tube_plate_quote::db::get_default_db_path;
use tube_plate_quote::{ImportApi, PriceRuleRepository};

fn main() -> Result<()> {
    tube_plate_quote::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} v{}", tube_plate_quote::APP_NAME, tube_plate_quote::VERSION);
    tracing::info!("==================================================");

    let mut args = std::env::args().skip(1);
    let file_path = match args.next() {
        Some(path) => path,
        None => bail!("用法: tube-plate-quote <单价表文件.xlsx|.csv> [数据库路径]"),
    };
    let db_path = args.next().unwrap_or_else(get_default_db_path);
    tracing::info!("使用数据库: {}", db_path);

    let repo = Arc::new(PriceRuleRepository::new(&db_path).context("初始化数据库失败")?);
    let import_api = ImportApi::new(repo);

    let report = import_api
        .import_file(&file_path)
        .with_context(|| format!("导入失败: {}", file_path))?;

    tracing::info!(
        success = report.success_count,
        failed = report.failure_count,
        "导入完成"
    );
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
