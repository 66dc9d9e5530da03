// ==========================================
// 管板加工报价系统 - 规则库（内存快照）
// ==========================================
// 职责: 持有当前单价规则集合，提供增/改/删与只读快照
// 并发契约: 写入走写时复制 (Arc::make_mut)；已发出的快照
//           不受后续编辑影响，一次报价解析始终看到一致视图
// 说明: 迭代序 = 录入序，即匹配的平手裁决序
// ==========================================

use crate::domain::price_rule::PriceRule;
use crate::repository::error::{RepositoryError, RepositoryResult};
use std::ops::Deref;
use std::sync::Arc;

// ==========================================
// 目录快照 (Catalog Snapshot)
// ==========================================
/// 不可变的规则集合视图。克隆只是 Arc 计数，可廉价分发给并发的
/// 报价解析；解引用为 `[PriceRule]` 直接喂给引擎
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    rules: Arc<Vec<PriceRule>>,
}

impl Deref for CatalogSnapshot {
    type Target = [PriceRule];

    fn deref(&self) -> &Self::Target {
        &self.rules
    }
}

impl CatalogSnapshot {
    pub fn rules(&self) -> &[PriceRule] {
        &self.rules
    }
}

// ==========================================
// 规则库 (Rule Store)
// ==========================================
#[derive(Debug)]
pub struct RuleStore {
    rules: Arc<Vec<PriceRule>>,
    next_id: i64,
}

impl Default for RuleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleStore {
    pub fn new() -> Self {
        Self {
            rules: Arc::new(Vec::new()),
            next_id: 1,
        }
    }

    /// 从已有规则集合构建（保留已分配的 ID；id=0 的规则补分配）
    pub fn from_rules(rules: Vec<PriceRule>) -> Self {
        let max_id = rules.iter().map(|r| r.id).max().unwrap_or(0);
        let mut store = Self {
            rules: Arc::new(Vec::new()),
            next_id: max_id + 1,
        };
        let inner = Arc::make_mut(&mut store.rules);
        for mut rule in rules {
            if rule.id == 0 {
                rule.id = store.next_id;
                store.next_id += 1;
            }
            inner.push(rule);
        }
        store
    }

    /// 当前一致视图快照
    pub fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            rules: Arc::clone(&self.rules),
        }
    }

    /// 追加规则，返回分配的 ID。追加在末尾，不影响既有平手序
    pub fn insert(&mut self, mut rule: PriceRule) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        rule.id = id;
        Arc::make_mut(&mut self.rules).push(rule);
        id
    }

    /// 覆盖指定 ID 的规则（保持原有位置，平手序不变）
    pub fn update(&mut self, id: i64, mut rule: PriceRule) -> RepositoryResult<()> {
        let rules = Arc::make_mut(&mut self.rules);
        match rules.iter_mut().find(|r| r.id == id) {
            Some(slot) => {
                rule.id = id;
                *slot = rule;
                Ok(())
            }
            None => Err(RepositoryError::NotFound {
                entity: "price_rule".to_string(),
                id,
            }),
        }
    }

    /// 删除指定 ID 的规则
    pub fn remove(&mut self, id: i64) -> RepositoryResult<PriceRule> {
        let rules = Arc::make_mut(&mut self.rules);
        match rules.iter().position(|r| r.id == id) {
            Some(pos) => Ok(rules.remove(pos)),
            None => Err(RepositoryError::NotFound {
                entity: "price_rule".to_string(),
                id,
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
