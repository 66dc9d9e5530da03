// ==========================================
// 管板加工报价系统 - 报价请求/结果实体
// ==========================================
// 职责: 描述一次价格匹配请求 (QuoteSpec) 与匹配产出 (QuoteResult)
// 说明: Web 层完成鉴权与形状校验后才构造 QuoteSpec
// ==========================================

use crate::domain::types::{BottomShape, OperationKind, PricingYear, ThreadKind};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ==========================================
// 钻孔参数
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrillingParams {
    /// 物料描述，直接作为二级分类的筛选字面量
    pub material_description: Option<String>,
    /// 管板材质，与规则的"材质"列做等值匹配
    pub tube_plate_material: Option<String>,
    /// 厚度；匹配时取整（5.5 按 5 匹配）
    pub thickness: Option<Decimal>,
    /// 钻孔孔径
    pub hole_diameter: Option<Decimal>,
    /// 钻孔孔数；参与区间筛选，也参与小计
    pub hole_count: Option<i32>,
}

impl DrillingParams {
    /// 任一参数有值即视为"请求了钻孔"
    pub fn is_requested(&self) -> bool {
        self.material_description.is_some()
            || self.tube_plate_material.is_some()
            || self.thickness.is_some()
            || self.hole_diameter.is_some()
            || self.hole_count.is_some()
    }
}

// ==========================================
// 攻螺纹参数
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadingParams {
    /// 螺纹类别 (螺纹盲孔/螺纹通孔)，决定匹配哪个一级分类
    pub category: ThreadKind,
    /// 管板材质；仅用于 ABS/非ABS 的不对称判定
    pub tube_plate_material: Option<String>,
    /// 螺纹型号，如 "M20"；只取其中的数字参与规格带匹配
    pub thread_spec: Option<String>,
    /// 厚度；匹配时取整
    pub thickness: Option<Decimal>,
    /// 螺纹孔数；只参与小计，不参与筛选
    pub hole_count: Option<i32>,
    /// 三级分类 (尖底/平底)；随单携带，不参与筛选
    pub bottom_shape: Option<BottomShape>,
}

impl ThreadingParams {
    pub fn new(category: ThreadKind) -> Self {
        Self {
            category,
            tube_plate_material: None,
            thread_spec: None,
            thickness: None,
            hole_count: None,
            bottom_shape: None,
        }
    }
}

// ==========================================
// 抠槽参数
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroovingParams {
    /// 物料描述，优先作为二级分类的筛选字面量
    pub material_description: Option<String>,
    /// 管板材质；无物料描述时由它推导 ABS/非ABS
    pub tube_plate_material: Option<String>,
    /// 抠槽孔数；参与区间筛选，也参与小计
    pub hole_count: Option<i32>,
}

impl GroovingParams {
    pub fn is_requested(&self) -> bool {
        self.material_description.is_some()
            || self.tube_plate_material.is_some()
            || self.hole_count.is_some()
    }
}

// ==========================================
// 报价请求 (Quote Spec)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteSpec {
    pub drilling: Option<DrillingParams>,
    pub threading: Option<ThreadingParams>,
    pub grooving: Option<GroovingParams>,
    /// 价格年份，默认 F28（与报价单页面一致）
    pub pricing_year: PricingYear,
}

impl QuoteSpec {
    pub fn new(pricing_year: PricingYear) -> Self {
        Self {
            drilling: None,
            threading: None,
            grooving: None,
            pricing_year,
        }
    }
}

impl Default for QuoteSpec {
    fn default() -> Self {
        Self::new(PricingYear::F28)
    }
}

// ==========================================
// 报价结果 (Quote Result)
// ==========================================
/// 单个加工项的匹配结果。unit_price 为 None 表示无匹配规则，
/// 这是正常业务结果而非错误。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationQuote {
    pub operation: OperationKind,
    pub unit_price: Option<Decimal>,
    pub hole_count: Option<i32>,
    /// 小计 = (单价 ?? 0) * (孔数 ?? 0)，全精度，无中间舍入
    pub subtotal: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteResult {
    /// 仅包含请求中出现的加工项，顺序: 钻孔 -> 攻螺纹 -> 抠槽
    pub items: Vec<OperationQuote>,
    /// 总价 = 各小计之和，全精度
    pub grand_total: Decimal,
}

impl QuoteResult {
    pub fn item(&self, operation: OperationKind) -> Option<&OperationQuote> {
        self.items.iter().find(|i| i.operation == operation)
    }
}

// ==========================================
// 价格匹配响应 (Web 层形状)
// ==========================================
/// /api/quotes/price-match 的响应体: 三个可空的价格字符串
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceMatchResponse {
    pub drilling_price: Option<String>,
    pub threading_price: Option<String>,
    pub grooving_price: Option<String>,
}
