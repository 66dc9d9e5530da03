// ==========================================
// 管板加工报价系统 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 行级数据问题不在此处建模——它们进入 ImportReport，
//       这里只描述让整个批次无法开始的文件级失败
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .xlsx/.xls/.csv）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("Excel 解析失败: {0}")]
    ExcelParseError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    #[error("工作簿为空: {0}")]
    EmptyWorkbook(String),
}

/// 导入模块统一 Result 类型
pub type ImportResult<T> = Result<T, ImportError>;
