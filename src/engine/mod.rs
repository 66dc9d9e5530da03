// ==========================================
// 管板加工报价系统 - 引擎层
// ==========================================
// 职责: 价格匹配、费用计算、报价编排的业务规则
// 红线: 引擎只读目录快照，不拼 SQL，无副作用
// ==========================================

pub mod calculator;
pub mod matcher;
pub mod predicate;
pub mod resolver;

// 重导出核心引擎
pub use calculator::CostCalculator;
pub use matcher::{extract_thread_size, PriceMatcher};
pub use predicate::{matches_all, Predicate};
pub use resolver::QuotationResolver;
