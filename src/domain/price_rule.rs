// ==========================================
// 管板加工报价系统 - 单价规则实体
// ==========================================
// 职责: 表达单价表中的一行（加工类别 + 适用条件 + 四个财年单价）
// 说明: 除一级分类外所有字段均可为空；区间为闭区间
// ==========================================

use crate::domain::types::{BottomShape, MaterialClass, OperationKind, PricingYear};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ==========================================
// 闭区间 (小数) - 孔径/螺纹规格带
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DecimalRange {
    pub min: Option<Decimal>,
    pub max: Option<Decimal>,
}

impl DecimalRange {
    pub fn new(min: Option<Decimal>, max: Option<Decimal>) -> Self {
        Self { min, max }
    }

    /// 闭区间包含判定。任一端缺失视为"区间不完整"，恒为不命中：
    /// 带数值条件的请求不会匹配开放区间的规则
    pub fn contains(&self, value: Decimal) -> bool {
        match (self.min, self.max) {
            (Some(min), Some(max)) => min <= value && value <= max,
            _ => false,
        }
    }
}

// ==========================================
// 闭区间 (整数) - 孔数
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    pub min: Option<i32>,
    pub max: Option<i32>,
}

impl CountRange {
    pub fn new(min: Option<i32>, max: Option<i32>) -> Self {
        Self { min, max }
    }

    /// 闭区间包含判定，规则同 DecimalRange::contains
    pub fn contains(&self, value: i32) -> bool {
        match (self.min, self.max) {
            (Some(min), Some(max)) => min <= value && value <= max,
            _ => false,
        }
    }
}

// ==========================================
// 四个财年单价 (F25-F28)
// ==========================================
// 至少一列非空才有实际意义，但导入时不强制
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct YearlyPrices {
    pub f25: Option<Decimal>,
    pub f26: Option<Decimal>,
    pub f27: Option<Decimal>,
    pub f28: Option<Decimal>,
}

impl YearlyPrices {
    pub fn get(&self, year: PricingYear) -> Option<Decimal> {
        match year {
            PricingYear::F25 => self.f25,
            PricingYear::F26 => self.f26,
            PricingYear::F27 => self.f27,
            PricingYear::F28 => self.f28,
        }
    }
}

// ==========================================
// 单价规则 (Price Rule)
// ==========================================
/// 单价表中的一条规则。
///
/// 数据契约: 区间两端都有值时应满足 min <= max（由维护单价表的人保证，
/// 倒置的区间不会报错，只是永远不命中）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRule {
    /// 数据库自增ID；未持久化时为 0
    pub id: i64,
    /// 一级分类 - 唯一必填字段
    pub primary_category: OperationKind,
    /// 二级分类 (ABS/非ABS)
    pub material_class: Option<MaterialClass>,
    /// 三级分类 (尖底/平底)，螺纹规则使用
    pub bottom_shape: Option<BottomShape>,
    /// 材质 (不锈钢/普通材质/09MnNiDⅢ 等自由文本)
    pub material_grade: Option<String>,
    /// 厚度，精确匹配（整数）
    pub thickness: Option<i32>,
    /// 孔径闭区间；螺纹规则复用该区间存放螺纹规格带，见 thread_size_range()
    pub hole_diameter_range: DecimalRange,
    /// 孔数闭区间
    pub hole_count_range: CountRange,
    /// F25-F28 财年单价
    pub prices: YearlyPrices,
    /// 创建时间（仓储层记账用，不参与匹配）
    pub created_at: DateTime<Utc>,
}

impl PriceRule {
    /// 按一级分类构造空规则，其余条件由调用方填充
    pub fn new(primary_category: OperationKind) -> Self {
        Self {
            id: 0,
            primary_category,
            material_class: None,
            bottom_shape: None,
            material_grade: None,
            thickness: None,
            hole_diameter_range: DecimalRange::default(),
            hole_count_range: CountRange::default(),
            prices: YearlyPrices::default(),
            created_at: Utc::now(),
        }
    }

    /// 螺纹规格带。
    ///
    /// 历史包袱: 导入模板没有独立的螺纹规格列，螺纹规则把可受理的
    /// 规格数值带（如 M16~M30 的 16~30）写在"最小孔径/最大孔径"两列里。
    /// 领域模型里用独立命名暴露这一语义，存储仍与孔径区间同列。
    pub fn thread_size_range(&self) -> &DecimalRange {
        &self.hole_diameter_range
    }

    /// 指定财年的单价；该年列为空返回 None，不回退到其他年份
    pub fn unit_price(&self, year: PricingYear) -> Option<Decimal> {
        self.prices.get(year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_range_inclusive_bounds() {
        let range = DecimalRange::new(Some(dec!(9.7)), Some(dec!(15.0)));
        assert!(range.contains(dec!(9.7)));
        assert!(range.contains(dec!(15.0)));
        assert!(range.contains(dec!(12)));
        assert!(!range.contains(dec!(9.69)));
        assert!(!range.contains(dec!(15.01)));
    }

    #[test]
    fn test_open_range_never_matches() {
        // 缺任一端的区间对带数值的请求恒为不命中
        assert!(!DecimalRange::new(Some(dec!(1)), None).contains(dec!(5)));
        assert!(!DecimalRange::new(None, Some(dec!(10))).contains(dec!(5)));
        assert!(!DecimalRange::default().contains(dec!(5)));
        assert!(!CountRange::new(Some(1), None).contains(5));
    }

    #[test]
    fn test_inverted_range_never_matches() {
        let range = CountRange::new(Some(20), Some(4));
        assert!(!range.contains(10));
    }

    #[test]
    fn test_unit_price_no_year_fallback() {
        let mut rule = PriceRule::new(OperationKind::Drilling);
        rule.prices.f25 = Some(dec!(2.50));
        assert_eq!(rule.unit_price(PricingYear::F25), Some(dec!(2.50)));
        // F26 列为空 => None，不回退到 F25
        assert_eq!(rule.unit_price(PricingYear::F26), None);
    }

    #[test]
    fn test_thread_size_range_aliases_diameter_columns() {
        let mut rule = PriceRule::new(OperationKind::ThreadingBlind);
        rule.hole_diameter_range = DecimalRange::new(Some(dec!(16)), Some(dec!(30)));
        assert!(rule.thread_size_range().contains(dec!(20)));
    }
}
