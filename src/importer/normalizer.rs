// ==========================================
// 管板加工报价系统 - 单价表行规范化
// ==========================================
// 职责: 把 13 列定长的原始行转换为 PriceRule，行级错误进入报告
// 红线: 单行失败绝不中断批次（部分成功语义）
// ==========================================
// 列序（与下载模板一致）:
//   0 一级分类  1 二级分类  2 三级分类  3 材质  4 厚度
//   5 最小孔径  6 最大孔径  7 最小孔数  8 最大孔数
//   9 F25价格  10 F26价格  11 F27价格  12 F28价格
// ==========================================

use crate::domain::price_rule::{CountRange, DecimalRange, PriceRule, YearlyPrices};
use crate::domain::types::{BottomShape, MaterialClass, OperationKind};
use crate::importer::data_cleaner::DataCleaner;
use serde::{Deserialize, Serialize};

/// 导入报告：调用方可见的汇总结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportReport {
    pub success_count: usize,
    pub failure_count: usize,
    /// 每条错误带原始表格中 1-based 行号（含表头偏移）
    pub errors: Vec<String>,
}

/// 规范化批次结果：合法规则 + 报告
#[derive(Debug, Clone, Default)]
pub struct NormalizedBatch {
    pub rules: Vec<PriceRule>,
    pub report: ImportReport,
}

pub struct CatalogNormalizer;

impl CatalogNormalizer {
    /// 规范化一批数据行（不含表头行）。
    ///
    /// 行号规则: 第 i 个数据行对应表格第 i+2 行（表头占第 1 行）。
    /// 全空行直接跳过，不计入成功也不计入失败。
    pub fn normalize_rows(data_rows: &[Vec<String>]) -> NormalizedBatch {
        let mut batch = NormalizedBatch::default();

        for (i, row) in data_rows.iter().enumerate() {
            let sheet_row = i + 2;

            if row.iter().all(|cell| cell.trim().is_empty()) {
                continue;
            }

            match Self::normalize_row(row) {
                Ok(rule) => {
                    batch.rules.push(rule);
                    batch.report.success_count += 1;
                }
                Err(message) => {
                    batch
                        .report
                        .errors
                        .push(format!("第{}行：{}", sheet_row, message));
                    batch.report.failure_count += 1;
                }
            }
        }

        tracing::info!(
            success = batch.report.success_count,
            failed = batch.report.failure_count,
            "单价表规范化完成"
        );
        batch
    }

    /// 规范化单行。只有一级分类会产生行级错误；
    /// 其余字段解析失败一律落为 None。
    fn normalize_row(row: &[String]) -> Result<PriceRule, String> {
        let cell = |idx: usize| row.get(idx).map(String::as_str).unwrap_or("");

        let category = DataCleaner::clean_string(cell(0))
            .ok_or_else(|| "一级分类是必填字段".to_string())?;
        let primary_category = OperationKind::parse(&category).ok_or_else(|| {
            format!("一级分类必须是：{}", OperationKind::VALID_VALUES_HINT)
        })?;

        let mut rule = PriceRule::new(primary_category);
        rule.material_class =
            DataCleaner::clean_string(cell(1)).and_then(|v| MaterialClass::parse(&v));
        rule.bottom_shape =
            DataCleaner::clean_string(cell(2)).and_then(|v| BottomShape::parse(&v));
        rule.material_grade = DataCleaner::clean_string(cell(3));
        rule.thickness = DataCleaner::clean_integer(cell(4));
        rule.hole_diameter_range = DecimalRange::new(
            DataCleaner::clean_numeric(cell(5)),
            DataCleaner::clean_numeric(cell(6)),
        );
        rule.hole_count_range = CountRange::new(
            DataCleaner::clean_integer(cell(7)),
            DataCleaner::clean_integer(cell(8)),
        );
        rule.prices = YearlyPrices {
            f25: DataCleaner::clean_numeric(cell(9)),
            f26: DataCleaner::clean_numeric(cell(10)),
            f27: DataCleaner::clean_numeric(cell(11)),
            f28: DataCleaner::clean_numeric(cell(12)),
        };

        Ok(rule)
    }
}
