// ==========================================
// 管板加工报价系统 - 单元格数据清洗
// ==========================================
// 职责: 把半类型化的表格单元格归约为"有效字段或 None"
// 红线: 清洗后解析失败一律归为 None，绝不隐式参与算术
// ==========================================

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

pub struct DataCleaner;

impl DataCleaner {
    /// 文本清洗: TRIM，空串归 None
    pub fn clean_string(value: &str) -> Option<String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// 数值单元格清洗: 去掉孔径符号（Ø/Φ/φ）及其他非数字字符，
    /// 只保留数字、小数点、负号。清洗后为空或不可解析 => None
    pub fn clean_numeric(value: &str) -> Option<Decimal> {
        let cleaned: String = value
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
            .collect();
        if cleaned.is_empty() {
            return None;
        }
        Decimal::from_str(&cleaned).ok()
    }

    /// 整数单元格清洗: 先按数值清洗，再向零截断（"5.5" => 5）
    pub fn clean_integer(value: &str) -> Option<i32> {
        Self::clean_numeric(value).and_then(|d| d.trunc().to_i32())
    }
}
