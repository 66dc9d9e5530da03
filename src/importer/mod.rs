// ==========================================
// 管板加工报价系统 - 导入层
// ==========================================
// 职责: 单价表文件解析 / 单元格清洗 / 行规范化 / 下载模板
// 红线: 行级失败隔离，绝不级联中断批次
// ==========================================

pub mod data_cleaner;
pub mod error;
pub mod file_parser;
pub mod normalizer;
pub mod template;

pub use data_cleaner::DataCleaner;
pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvParser, ExcelParser, RawRows, UniversalFileParser};
pub use normalizer::{CatalogNormalizer, ImportReport, NormalizedBatch};
pub use template::{template_sample_rows, TEMPLATE_HEADERS};
