// ==========================================
// 管板加工报价系统 - 匹配谓词
// ==========================================
// 职责: 统一的规则匹配谓词集合，三类加工共用同一套求值逻辑
// 红线: 谓词只读规则，无状态、无副作用
// ==========================================
// 设计: 历史实现按加工类别写了三段近似重复的筛选分支，
//       这里改为"谓词列表 + 通用 AND 求值"，分支差异只体现在
//       各自的谓词构造器里（见 matcher.rs）
// ==========================================

use crate::domain::price_rule::PriceRule;
use crate::domain::types::{MaterialClass, OperationKind};
use rust_decimal::Decimal;

/// 单个匹配条件。一条规则命中当且仅当谓词列表全部成立（逻辑 AND）。
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// 一级分类等值
    Category(OperationKind),
    /// 二级分类等值（已解析的 ABS/非ABS）
    MaterialClassIs(MaterialClass),
    /// 二级分类按字面量等值。物料描述直接作为筛选值时使用：
    /// 描述不是 "ABS"/"非ABS" 之一则永远不命中，与来源行为一致
    MaterialClassLabel(String),
    /// 材质列等值
    MaterialGrade(String),
    /// 厚度精确等值（整数）
    Thickness(i32),
    /// 孔径落在规则孔径闭区间内（区间两端必须都有值）
    DiameterWithin(Decimal),
    /// 螺纹规格数值落在规则螺纹规格带内（同列存储，语义见 PriceRule）
    ThreadSizeWithin(Decimal),
    /// 孔数落在规则孔数闭区间内（区间两端必须都有值）
    HoleCountWithin(i32),
    /// 恒不成立。请求携带了条件但数值无法参与比较（如厚度截断后
    /// 超出整数表示范围）时使用：条件不能被丢弃放宽，只能判不命中
    Unsatisfiable,
}

impl Predicate {
    /// 谓词对单条规则是否成立
    pub fn holds(&self, rule: &PriceRule) -> bool {
        match self {
            Predicate::Category(kind) => rule.primary_category == *kind,
            Predicate::MaterialClassIs(class) => rule.material_class == Some(*class),
            Predicate::MaterialClassLabel(label) => rule
                .material_class
                .is_some_and(|class| class.label() == label.as_str()),
            Predicate::MaterialGrade(grade) => {
                rule.material_grade.as_deref() == Some(grade.as_str())
            }
            Predicate::Thickness(t) => rule.thickness == Some(*t),
            Predicate::DiameterWithin(d) => rule.hole_diameter_range.contains(*d),
            Predicate::ThreadSizeWithin(size) => rule.thread_size_range().contains(*size),
            Predicate::HoleCountWithin(n) => rule.hole_count_range.contains(*n),
            Predicate::Unsatisfiable => false,
        }
    }
}

/// 通用求值: 谓词全部成立才命中
pub fn matches_all(rule: &PriceRule, predicates: &[Predicate]) -> bool {
    predicates.iter().all(|p| p.holds(rule))
}
