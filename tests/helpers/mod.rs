// ==========================================
// 集成测试辅助函数
// ==========================================
#![allow(dead_code)]

use rust_decimal::Decimal;
use std::str::FromStr;
use tube_plate_quote::{
    CountRange, DecimalRange, MaterialClass, OperationKind, PriceRule, YearlyPrices,
};

/// 初始化测试日志（try_init 幂等，可在每个用例里调用）
pub fn init_test_logging() {
    tube_plate_quote::logging::init_test();
}

/// 十进制字面量（集成测试里避免到处写 from_str）
pub fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// 规格书示例的钻孔规则:
/// 不锈钢 / 厚度5 / 孔径[9.7,15.0] / 孔数[4,20] / F25=2.50
pub fn stainless_drilling_rule() -> PriceRule {
    let mut rule = PriceRule::new(OperationKind::Drilling);
    rule.material_grade = Some("不锈钢".to_string());
    rule.thickness = Some(5);
    rule.hole_diameter_range = DecimalRange::new(Some(dec("9.7")), Some(dec("15.0")));
    rule.hole_count_range = CountRange::new(Some(4), Some(20));
    rule.prices = YearlyPrices {
        f25: Some(dec("2.50")),
        ..Default::default()
    };
    rule
}

/// ABS 螺纹盲孔规则: 规格带[16,30] / F28=3.20
pub fn abs_threading_rule() -> PriceRule {
    let mut rule = PriceRule::new(OperationKind::ThreadingBlind);
    rule.material_class = Some(MaterialClass::Abs);
    rule.hole_diameter_range = DecimalRange::new(Some(dec("16")), Some(dec("30")));
    rule.prices = YearlyPrices {
        f28: Some(dec("3.20")),
        ..Default::default()
    };
    rule
}

/// 非ABS 抠槽规则: 孔数[6,50] / F28=1.80
pub fn non_abs_grooving_rule() -> PriceRule {
    let mut rule = PriceRule::new(OperationKind::Grooving);
    rule.material_class = Some(MaterialClass::NonAbs);
    rule.hole_count_range = CountRange::new(Some(6), Some(50));
    rule.prices = YearlyPrices {
        f28: Some(dec("1.80")),
        ..Default::default()
    };
    rule
}
