// ==========================================
// 管板加工报价系统 - 仓储层
// ==========================================
// 职责: 单价规则的持久化与内存快照
// 红线: 引擎不直接访问数据库，统一经快照读取
// ==========================================

pub mod error;
pub mod price_rule_repo;
pub mod rule_store;

pub use error::{RepositoryError, RepositoryResult};
pub use price_rule_repo::PriceRuleRepository;
pub use rule_store::{CatalogSnapshot, RuleStore};
