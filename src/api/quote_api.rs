// ==========================================
// 管板加工报价系统 - 报价接口
// ==========================================
// 职责: 读取规则库快照，驱动引擎完成价格匹配与整单报价
// 说明: Web 层负责鉴权与请求形状校验后调用本层
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::quote::{PriceMatchResponse, QuoteResult, QuoteSpec};
use crate::engine::QuotationResolver;
use crate::repository::{CatalogSnapshot, PriceRuleRepository};
use std::sync::Arc;

pub struct QuoteApi {
    repo: Arc<PriceRuleRepository>,
}

impl QuoteApi {
    pub fn new(repo: Arc<PriceRuleRepository>) -> Self {
        Self { repo }
    }

    /// price-match 响应: 三个可空价格字符串
    pub fn price_match(&self, spec: &QuoteSpec) -> ApiResult<PriceMatchResponse> {
        let snapshot = self.load_snapshot()?;
        Ok(QuotationResolver::price_match(spec, snapshot.rules()))
    }

    /// 整单报价: 各加工项小计 + 总价
    pub fn resolve(&self, spec: &QuoteSpec) -> ApiResult<QuoteResult> {
        let snapshot = self.load_snapshot()?;
        Ok(QuotationResolver::resolve_quote(spec, snapshot.rules()))
    }

    /// 每次解析读一次快照；解析期间的目录编辑对本次不可见。
    /// 读取失败是硬错误（CatalogUnavailable），不伪装成无匹配
    fn load_snapshot(&self) -> ApiResult<CatalogSnapshot> {
        let store = self
            .repo
            .load_store()
            .map_err(|e| ApiError::CatalogUnavailable(e.to_string()))?;
        Ok(store.snapshot())
    }
}
