// ==========================================
// 管板加工报价系统 - 单价表导入接口
// ==========================================
// 职责: 文件解析 -> 行规范化 -> 合法规则入库 -> 返回导入报告
// 红线: 部分成功语义；行级错误进报告，绝不中断批次
// ==========================================

use crate::api::error::ApiResult;
use crate::domain::price_rule::PriceRule;
use crate::importer::{CatalogNormalizer, ImportReport, UniversalFileParser};
use crate::repository::PriceRuleRepository;
use std::path::Path;
use std::sync::Arc;

pub struct ImportApi {
    repo: Arc<PriceRuleRepository>,
}

impl ImportApi {
    pub fn new(repo: Arc<PriceRuleRepository>) -> Self {
        Self { repo }
    }

    /// 从 Excel/CSV 文件导入单价表。
    /// 文件首行视为表头并跳过；行号报告含表头偏移
    pub fn import_file<P: AsRef<Path>>(&self, file_path: P) -> ApiResult<ImportReport> {
        let path = file_path.as_ref();
        tracing::info!(file = %path.display(), "开始导入单价表");
        let rows = UniversalFileParser::parse(path)?;
        let data_rows = if rows.is_empty() { &rows[..] } else { &rows[1..] };
        self.import_rows(data_rows)
    }

    /// 导入已就位的原始数据行（不含表头）
    pub fn import_rows(&self, data_rows: &[Vec<String>]) -> ApiResult<ImportReport> {
        let batch = CatalogNormalizer::normalize_rows(data_rows);
        if !batch.rules.is_empty() {
            self.repo.insert_batch(&batch.rules)?;
        }
        Ok(batch.report)
    }

    // ===== 目录维护（Web 层 CRUD 透传）=====

    pub fn add_rule(&self, rule: &PriceRule) -> ApiResult<i64> {
        Ok(self.repo.insert(rule)?)
    }

    pub fn update_rule(&self, id: i64, rule: &PriceRule) -> ApiResult<()> {
        Ok(self.repo.update(id, rule)?)
    }

    pub fn delete_rule(&self, id: i64) -> ApiResult<()> {
        Ok(self.repo.delete(id)?)
    }

    pub fn list_rules(&self) -> ApiResult<Vec<PriceRule>> {
        Ok(self.repo.list_all()?)
    }
}
