// ==========================================
// 管板加工报价系统 - API层错误类型
// ==========================================
// 职责: 把仓储/导入错误转换为调用方可读的错误
// 说明: "无匹配价格"不是错误——它以空价格体现在响应里；
//       只有规则库不可读才是对本次解析致命的硬失败
// ==========================================

use crate::importer::ImportError;
use crate::repository::RepositoryError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    /// 规则库不可读，对当前解析是硬失败，绝不降级为"无匹配"
    #[error("单价目录不可用: {0}")]
    CatalogUnavailable(String),

    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    #[error("导入失败: {0}")]
    ImportFailed(String),
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, id } => {
                ApiError::NotFound(format!("{} id={}", entity, id))
            }
            other => ApiError::CatalogUnavailable(other.to_string()),
        }
    }
}

impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        ApiError::ImportFailed(err.to_string())
    }
}

/// API层统一 Result 类型
pub type ApiResult<T> = Result<T, ApiError>;
