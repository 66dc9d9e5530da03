// ==========================================
// 管板加工报价系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型
// 红线: 不含数据访问逻辑,不含匹配逻辑
// ==========================================

pub mod price_rule;
pub mod quote;
pub mod types;

// 重导出核心类型
pub use price_rule::{CountRange, DecimalRange, PriceRule, YearlyPrices};
pub use quote::{
    DrillingParams, GroovingParams, OperationQuote, PriceMatchResponse, QuoteResult, QuoteSpec,
    ThreadingParams,
};
pub use types::{BottomShape, MaterialClass, OperationKind, PricingYear, ThreadKind};
