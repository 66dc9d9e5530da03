// ==========================================
// 管板加工报价系统 - 价格匹配器
// ==========================================
// 职责: 按加工类别构造谓词列表，在目录快照中找第一条命中规则，
//       解析指定财年单价
// 红线: 只读快照，无状态；无匹配返回 None，不是错误
// ==========================================
// 平手规则: 多条规则同时命中时取快照迭代序（即录入序）中的第一条，
//           不做特异性排序。这是沿袭来源系统的既定行为；
//           将来要引入优先级字段时，只需在这里改选择策略
// ==========================================

use crate::domain::price_rule::PriceRule;
use crate::domain::quote::{DrillingParams, GroovingParams, ThreadingParams};
use crate::domain::types::{MaterialClass, OperationKind, PricingYear};
use crate::engine::predicate::{matches_all, Predicate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

pub struct PriceMatcher;

impl PriceMatcher {
    /// 钻孔匹配。
    /// 条件: 一级分类 + 物料描述(二级分类字面量) + 管板材质(材质列)
    ///       + 厚度 + 孔径区间 + 孔数区间
    pub fn resolve_drilling(
        params: &DrillingParams,
        year: PricingYear,
        rules: &[PriceRule],
    ) -> Option<Decimal> {
        let mut predicates = vec![Predicate::Category(OperationKind::Drilling)];

        if let Some(description) = &params.material_description {
            predicates.push(Predicate::MaterialClassLabel(description.clone()));
        }
        if let Some(material) = &params.tube_plate_material {
            predicates.push(Predicate::MaterialGrade(material.clone()));
        }
        if let Some(thickness) = params.thickness {
            predicates.push(thickness_predicate(thickness));
        }
        if let Some(diameter) = params.hole_diameter {
            predicates.push(Predicate::DiameterWithin(diameter));
        }
        if let Some(count) = params.hole_count {
            predicates.push(Predicate::HoleCountWithin(count));
        }

        Self::first_match(&predicates, year, rules, OperationKind::Drilling)
    }

    /// 攻螺纹匹配（螺纹盲孔/螺纹通孔由请求的螺纹类别决定）。
    /// 条件: 一级分类 + 螺纹规格带 + 厚度 + 二级分类的不对称判定。
    /// 孔数不参与筛选，只参与小计。
    pub fn resolve_threading(
        params: &ThreadingParams,
        year: PricingYear,
        rules: &[PriceRule],
    ) -> Option<Decimal> {
        let kind = params.category.operation_kind();
        let mut predicates = vec![Predicate::Category(kind)];

        if let Some(digits) = params.thread_spec.as_deref().and_then(first_digit_run) {
            // 数字串解析失败（超出 Decimal 表示范围）不等于"没给规格"：
            // 条件存在但无法比较，判为不可匹配
            match Decimal::from_str(&digits) {
                Ok(size) => predicates.push(Predicate::ThreadSizeWithin(size)),
                Err(_) => predicates.push(Predicate::Unsatisfiable),
            }
        }
        if let Some(thickness) = params.thickness {
            predicates.push(thickness_predicate(thickness));
        }

        // 不对称判定: 管板材质恰为 "ABS" 才要求二级分类 ABS；
        // 其余情况（含未填）一律要求二级分类为非ABS
        let required_class = match params.tube_plate_material.as_deref() {
            Some("ABS") => MaterialClass::Abs,
            _ => MaterialClass::NonAbs,
        };
        predicates.push(Predicate::MaterialClassIs(required_class));

        Self::first_match(&predicates, year, rules, kind)
    }

    /// 抠槽匹配。
    /// 条件: 一级分类 + 二级分类（物料描述优先，否则由管板材质推导）
    ///       + 孔数区间
    pub fn resolve_grooving(
        params: &GroovingParams,
        year: PricingYear,
        rules: &[PriceRule],
    ) -> Option<Decimal> {
        let mut predicates = vec![Predicate::Category(OperationKind::Grooving)];

        if let Some(description) = &params.material_description {
            predicates.push(Predicate::MaterialClassLabel(description.clone()));
        } else if let Some(material) = &params.tube_plate_material {
            predicates.push(Predicate::MaterialClassIs(
                MaterialClass::from_tube_plate_material(material),
            ));
        }
        if let Some(count) = params.hole_count {
            predicates.push(Predicate::HoleCountWithin(count));
        }

        Self::first_match(&predicates, year, rules, OperationKind::Grooving)
    }

    /// 通用选取: 按快照迭代序取第一条全谓词命中的规则，
    /// 再取该规则指定财年的单价（该年列为空 => None，无年份回退）
    fn first_match(
        predicates: &[Predicate],
        year: PricingYear,
        rules: &[PriceRule],
        kind: OperationKind,
    ) -> Option<Decimal> {
        let selected = rules.iter().find(|rule| matches_all(rule, predicates));
        match &selected {
            Some(rule) => {
                let price = rule.unit_price(year);
                tracing::debug!(
                    operation = %kind,
                    rule_id = rule.id,
                    year = %year,
                    price = ?price,
                    conditions = predicates.len(),
                    "价格匹配命中"
                );
                price
            }
            None => {
                tracing::debug!(
                    operation = %kind,
                    conditions = predicates.len(),
                    "价格匹配无结果"
                );
                None
            }
        }
    }
}

/// 从螺纹型号中提取首个连续数字串（如 "M20" => "20"，"M20x1.5" => "20"）。
/// 无数字返回 None
fn first_digit_run(spec: &str) -> Option<String> {
    let digits: String = spec
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        None
    } else {
        Some(digits)
    }
}

/// 螺纹型号中的规格数值（如 "M20" => 20）。
/// 无数字或数字串超出 Decimal 表示范围返回 None
pub fn extract_thread_size(spec: &str) -> Option<Decimal> {
    first_digit_run(spec).and_then(|digits| Decimal::from_str(&digits).ok())
}

/// 厚度取整谓词: 请求侧厚度可能带小数，匹配按向零截断后的整数进行。
/// 截断后超出 i32 的厚度不可能等于任何规则厚度，判为不可匹配而非放宽
fn thickness_predicate(thickness: Decimal) -> Predicate {
    match thickness.trunc().to_i32() {
        Some(t) => Predicate::Thickness(t),
        None => Predicate::Unsatisfiable,
    }
}
