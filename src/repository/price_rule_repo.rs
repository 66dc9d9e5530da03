// ==========================================
// 管板加工报价系统 - 单价规则仓储 (SQLite)
// ==========================================
// 职责: price_items 表的持久化 CRUD；引擎不直接访问本层，
//       经 RuleStore 快照读取
// 说明: 小数列按 TEXT 存储（rust_decimal 字符串），避免浮点列
//       丢失精度；读回时解析失败落为 NULL 语义
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::price_rule::{CountRange, DecimalRange, PriceRule, YearlyPrices};
use crate::domain::types::{BottomShape, MaterialClass, OperationKind};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::rule_store::RuleStore;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::{Arc, Mutex, MutexGuard};

pub struct PriceRuleRepository {
    conn: Arc<Mutex<Connection>>,
}

impl PriceRuleRepository {
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        let repo = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        repo.ensure_table()?;
        Ok(repo)
    }

    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> RepositoryResult<Self> {
        let repo = Self { conn };
        repo.ensure_table()?;
        Ok(repo)
    }

    fn get_conn(&self) -> RepositoryResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 确保表存在（如果不存在则创建）
    fn ensure_table(&self) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS price_items (
                id                INTEGER PRIMARY KEY AUTOINCREMENT,
                category1         TEXT NOT NULL,
                category2         TEXT,
                category3         TEXT,
                material          TEXT,
                thickness         INTEGER,
                min_hole_diameter TEXT,
                max_hole_diameter TEXT,
                min_holes         INTEGER,
                max_holes         INTEGER,
                f25_price         TEXT,
                f26_price         TEXT,
                f27_price         TEXT,
                f28_price         TEXT,
                created_at        TEXT NOT NULL
            );
            "#,
        )?;
        Ok(())
    }

    /// 插入单条规则，返回分配的 ID
    pub fn insert(&self, rule: &PriceRule) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        Self::insert_with(&conn, rule)
    }

    /// 批量插入（单事务）。导入批次要么整体落库要么整体回滚，
    /// 行级校验失败在规范化阶段就已剔除，不会走到这里
    pub fn insert_batch(&self, rules: &[PriceRule]) -> RepositoryResult<usize> {
        let mut conn = self.get_conn()?;
        let tx = conn
            .transaction()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;
        for rule in rules {
            Self::insert_with(&tx, rule)?;
        }
        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;
        tracing::info!(count = rules.len(), "单价规则批量入库完成");
        Ok(rules.len())
    }

    fn insert_with(conn: &Connection, rule: &PriceRule) -> RepositoryResult<i64> {
        conn.execute(
            r#"
            INSERT INTO price_items (
                category1, category2, category3, material, thickness,
                min_hole_diameter, max_hole_diameter, min_holes, max_holes,
                f25_price, f26_price, f27_price, f28_price, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)
            "#,
            params![
                rule.primary_category.label(),
                rule.material_class.map(|c| c.label()),
                rule.bottom_shape.map(|s| s.label()),
                rule.material_grade,
                rule.thickness,
                rule.hole_diameter_range.min.map(|d| d.to_string()),
                rule.hole_diameter_range.max.map(|d| d.to_string()),
                rule.hole_count_range.min,
                rule.hole_count_range.max,
                rule.prices.f25.map(|d| d.to_string()),
                rule.prices.f26.map(|d| d.to_string()),
                rule.prices.f27.map(|d| d.to_string()),
                rule.prices.f28.map(|d| d.to_string()),
                rule.created_at.to_rfc3339(),
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// 覆盖指定 ID 的规则
    pub fn update(&self, id: i64, rule: &PriceRule) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let affected = conn.execute(
            r#"
            UPDATE price_items SET
                category1 = ?1, category2 = ?2, category3 = ?3, material = ?4,
                thickness = ?5, min_hole_diameter = ?6, max_hole_diameter = ?7,
                min_holes = ?8, max_holes = ?9,
                f25_price = ?10, f26_price = ?11, f27_price = ?12, f28_price = ?13
            WHERE id = ?14
            "#,
            params![
                rule.primary_category.label(),
                rule.material_class.map(|c| c.label()),
                rule.bottom_shape.map(|s| s.label()),
                rule.material_grade,
                rule.thickness,
                rule.hole_diameter_range.min.map(|d| d.to_string()),
                rule.hole_diameter_range.max.map(|d| d.to_string()),
                rule.hole_count_range.min,
                rule.hole_count_range.max,
                rule.prices.f25.map(|d| d.to_string()),
                rule.prices.f26.map(|d| d.to_string()),
                rule.prices.f27.map(|d| d.to_string()),
                rule.prices.f28.map(|d| d.to_string()),
                id,
            ],
        )?;
        if affected == 0 {
            return Err(RepositoryError::NotFound {
                entity: "price_items".to_string(),
                id,
            });
        }
        Ok(())
    }

    /// 删除指定 ID 的规则
    pub fn delete(&self, id: i64) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let affected = conn.execute("DELETE FROM price_items WHERE id = ?1", params![id])?;
        if affected == 0 {
            return Err(RepositoryError::NotFound {
                entity: "price_items".to_string(),
                id,
            });
        }
        Ok(())
    }

    /// 读取全部规则，按 ID 升序（即录入序，也是匹配的平手序）
    pub fn list_all(&self) -> RepositoryResult<Vec<PriceRule>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, category1, category2, category3, material, thickness,
                   min_hole_diameter, max_hole_diameter, min_holes, max_holes,
                   f25_price, f26_price, f27_price, f28_price, created_at
            FROM price_items
            ORDER BY id ASC
            "#,
        )?;
        let rules = stmt
            .query_map([], Self::map_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rules)
    }

    /// 读取全库构建内存规则库（快照来源）
    pub fn load_store(&self) -> RepositoryResult<RuleStore> {
        Ok(RuleStore::from_rules(self.list_all()?))
    }

    fn map_row(row: &Row<'_>) -> rusqlite::Result<PriceRule> {
        let category1: String = row.get(1)?;
        // NOT NULL 约束保证 category1 在合法集合内写入；读回失败说明
        // 数据被外部篡改，按类型错误上抛
        let primary_category = OperationKind::parse(&category1).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                1,
                rusqlite::types::Type::Text,
                format!("非法一级分类: {}", category1).into(),
            )
        })?;

        let created_at_raw: String = row.get(14)?;
        let created_at = DateTime::parse_from_rfc3339(&created_at_raw)
            .map(DateTime::<Utc>::from)
            .unwrap_or_else(|_| Utc::now());

        Ok(PriceRule {
            id: row.get(0)?,
            primary_category,
            material_class: row
                .get::<_, Option<String>>(2)?
                .and_then(|v| MaterialClass::parse(&v)),
            bottom_shape: row
                .get::<_, Option<String>>(3)?
                .and_then(|v| BottomShape::parse(&v)),
            material_grade: row.get(4)?,
            thickness: row.get(5)?,
            hole_diameter_range: DecimalRange::new(
                parse_decimal_column(row.get(6)?),
                parse_decimal_column(row.get(7)?),
            ),
            hole_count_range: CountRange::new(row.get(8)?, row.get(9)?),
            prices: YearlyPrices {
                f25: parse_decimal_column(row.get(10)?),
                f26: parse_decimal_column(row.get(11)?),
                f27: parse_decimal_column(row.get(12)?),
                f28: parse_decimal_column(row.get(13)?),
            },
            created_at,
        })
    }
}

fn parse_decimal_column(value: Option<String>) -> Option<Decimal> {
    value.and_then(|v| Decimal::from_str(&v).ok())
}
