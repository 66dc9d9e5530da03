// ==========================================
// 管板加工报价系统 - API 层
// ==========================================
// 职责: 面向 Web 层的业务接口（报价解析 / 单价表导入与维护）
// ==========================================

pub mod error;
pub mod import_api;
pub mod quote_api;

pub use error::{ApiError, ApiResult};
pub use import_api::ImportApi;
pub use quote_api::QuoteApi;
