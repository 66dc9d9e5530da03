// ==========================================
// 管板加工报价系统 - 报价编排器
// ==========================================
// 职责: 对请求中出现的各加工项依次调用匹配器与计算器，
//       汇总为 QuoteResult
// 红线: 对不可变快照是纯函数；同一快照同一请求结果恒定
// ==========================================

use crate::domain::price_rule::PriceRule;
use crate::domain::quote::{OperationQuote, PriceMatchResponse, QuoteResult, QuoteSpec};
use crate::engine::calculator::CostCalculator;
use crate::engine::matcher::PriceMatcher;

pub struct QuotationResolver;

impl QuotationResolver {
    /// 整单报价。请求中缺席的加工项不出现在结果里，对总价贡献 0。
    /// 钻孔/抠槽的空参数子记录视同缺席。
    pub fn resolve_quote(spec: &QuoteSpec, rules: &[PriceRule]) -> QuoteResult {
        let mut result = QuoteResult::default();

        if let Some(drilling) = spec.drilling.as_ref().filter(|p| p.is_requested()) {
            let unit_price =
                PriceMatcher::resolve_drilling(drilling, spec.pricing_year, rules);
            result.items.push(OperationQuote {
                operation: crate::domain::types::OperationKind::Drilling,
                unit_price,
                hole_count: drilling.hole_count,
                subtotal: CostCalculator::subtotal(unit_price, drilling.hole_count),
            });
        }

        if let Some(threading) = &spec.threading {
            let unit_price =
                PriceMatcher::resolve_threading(threading, spec.pricing_year, rules);
            result.items.push(OperationQuote {
                operation: threading.category.operation_kind(),
                unit_price,
                hole_count: threading.hole_count,
                subtotal: CostCalculator::subtotal(unit_price, threading.hole_count),
            });
        }

        if let Some(grooving) = spec.grooving.as_ref().filter(|p| p.is_requested()) {
            let unit_price =
                PriceMatcher::resolve_grooving(grooving, spec.pricing_year, rules);
            result.items.push(OperationQuote {
                operation: crate::domain::types::OperationKind::Grooving,
                unit_price,
                hole_count: grooving.hole_count,
                subtotal: CostCalculator::subtotal(unit_price, grooving.hole_count),
            });
        }

        let subtotals: Vec<_> = result.items.iter().map(|i| i.subtotal).collect();
        result.grand_total = CostCalculator::grand_total(&subtotals);
        result
    }

    /// Web 层 price-match 响应形状: 三个可空的价格字符串。
    /// 未请求的加工项对应字段为 None
    pub fn price_match(spec: &QuoteSpec, rules: &[PriceRule]) -> PriceMatchResponse {
        PriceMatchResponse {
            drilling_price: spec
                .drilling
                .as_ref()
                .filter(|p| p.is_requested())
                .and_then(|p| PriceMatcher::resolve_drilling(p, spec.pricing_year, rules))
                .map(|price| price.to_string()),
            threading_price: spec
                .threading
                .as_ref()
                .and_then(|p| PriceMatcher::resolve_threading(p, spec.pricing_year, rules))
                .map(|price| price.to_string()),
            grooving_price: spec
                .grooving
                .as_ref()
                .filter(|p| p.is_requested())
                .and_then(|p| PriceMatcher::resolve_grooving(p, spec.pricing_year, rules))
                .map(|price| price.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::price_rule::{CountRange, DecimalRange, YearlyPrices};
    use crate::domain::quote::DrillingParams;
    use crate::domain::types::{OperationKind, PricingYear};
    use rust_decimal_macros::dec;

    fn sample_rules() -> Vec<PriceRule> {
        let mut drilling = PriceRule::new(OperationKind::Drilling);
        drilling.thickness = Some(5);
        drilling.hole_diameter_range = DecimalRange::new(Some(dec!(9.7)), Some(dec!(15.0)));
        drilling.hole_count_range = CountRange::new(Some(4), Some(20));
        drilling.prices = YearlyPrices {
            f25: Some(dec!(2.50)),
            ..Default::default()
        };
        vec![drilling]
    }

    fn drilling_spec() -> QuoteSpec {
        let mut spec = QuoteSpec::new(PricingYear::F25);
        spec.drilling = Some(DrillingParams {
            thickness: Some(dec!(5)),
            hole_diameter: Some(dec!(12)),
            hole_count: Some(10),
            ..Default::default()
        });
        spec
    }

    #[test]
    fn test_resolve_quote_matched_drilling() {
        let result = QuotationResolver::resolve_quote(&drilling_spec(), &sample_rules());
        assert_eq!(result.items.len(), 1);
        let item = result.item(OperationKind::Drilling).unwrap();
        assert_eq!(item.unit_price, Some(dec!(2.50)));
        assert_eq!(item.subtotal, dec!(25.00));
        assert_eq!(result.grand_total, dec!(25.00));
    }

    #[test]
    fn test_resolve_quote_deterministic() {
        let rules = sample_rules();
        let spec = drilling_spec();
        let first = QuotationResolver::resolve_quote(&spec, &rules);
        let second = QuotationResolver::resolve_quote(&spec, &rules);
        assert_eq!(first, second);
    }

    #[test]
    fn test_absent_operations_omitted() {
        let spec = QuoteSpec::new(PricingYear::F25);
        let result = QuotationResolver::resolve_quote(&spec, &sample_rules());
        assert!(result.items.is_empty());
        assert_eq!(result.grand_total, dec!(0));
    }

    #[test]
    fn test_empty_drilling_params_treated_as_absent() {
        let mut spec = QuoteSpec::new(PricingYear::F25);
        spec.drilling = Some(DrillingParams::default());
        let result = QuotationResolver::resolve_quote(&spec, &sample_rules());
        assert!(result.items.is_empty());
    }

    #[test]
    fn test_no_match_yields_null_price_zero_subtotal() {
        let mut spec = drilling_spec();
        spec.drilling.as_mut().unwrap().hole_diameter = Some(dec!(16)); // 超出区间
        let result = QuotationResolver::resolve_quote(&spec, &sample_rules());
        let item = result.item(OperationKind::Drilling).unwrap();
        assert_eq!(item.unit_price, None);
        assert_eq!(item.subtotal, dec!(0));
        assert_eq!(result.grand_total, dec!(0));
    }

    #[test]
    fn test_price_match_response_shape() {
        let resp = QuotationResolver::price_match(&drilling_spec(), &sample_rules());
        assert_eq!(resp.drilling_price.as_deref(), Some("2.50"));
        assert_eq!(resp.threading_price, None);
        assert_eq!(resp.grooving_price, None);
    }
}
