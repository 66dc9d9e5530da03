// ==========================================
// 管板加工报价系统 - 核心库
// ==========================================
// 职责: 单价目录导入规范化 + 价格匹配 + 报价计算
// 技术栈: Rust + SQLite
// 边界: HTTP 路由/会话鉴权/页面渲染/文档导出由外部协作方承担
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 数据访问与内存快照
pub mod repository;

// 引擎层 - 匹配与计算规则
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{BottomShape, MaterialClass, OperationKind, PricingYear, ThreadKind};

// 领域实体
pub use domain::{
    CountRange, DecimalRange, DrillingParams, GroovingParams, OperationQuote, PriceMatchResponse,
    PriceRule, QuoteResult, QuoteSpec, ThreadingParams, YearlyPrices,
};

// 引擎
pub use engine::{CostCalculator, PriceMatcher, QuotationResolver};

// 导入
pub use importer::{CatalogNormalizer, ImportReport};

// 仓储
pub use repository::{CatalogSnapshot, PriceRuleRepository, RuleStore};

// API
pub use api::{ImportApi, QuoteApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "管板加工报价系统";
