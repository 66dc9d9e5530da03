// ==========================================
// 管板加工报价系统 - 领域类型定义
// ==========================================
// 依据: 单价表模板（一级/二级/三级分类）
// 说明: 枚举的序列化值与导入表格中的中文字面量一致
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 加工类别 (Operation Kind) - 一级分类
// ==========================================
// 封闭枚举: 单价表中一级分类只允许这四个值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationKind {
    #[serde(rename = "钻孔")]
    Drilling, // 钻孔
    #[serde(rename = "螺纹盲孔")]
    ThreadingBlind, // 螺纹盲孔
    #[serde(rename = "螺纹通孔")]
    ThreadingThrough, // 螺纹通孔
    #[serde(rename = "抠槽")]
    Grooving, // 抠槽
}

impl OperationKind {
    /// 一级分类合法值提示（导入报错时按模板顺序列出）
    pub const VALID_VALUES_HINT: &'static str = "钻孔、抠槽、螺纹盲孔、螺纹通孔";

    /// 单价表中的中文字面量
    pub fn label(&self) -> &'static str {
        match self {
            OperationKind::Drilling => "钻孔",
            OperationKind::ThreadingBlind => "螺纹盲孔",
            OperationKind::ThreadingThrough => "螺纹通孔",
            OperationKind::Grooving => "抠槽",
        }
    }

    /// 从单元格字面量解析；不在封闭集合内返回 None（由调用方决定是否报错）
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "钻孔" => Some(OperationKind::Drilling),
            "螺纹盲孔" => Some(OperationKind::ThreadingBlind),
            "螺纹通孔" => Some(OperationKind::ThreadingThrough),
            "抠槽" => Some(OperationKind::Grooving),
            _ => None,
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ==========================================
// 材料类别 (Material Class) - 二级分类
// ==========================================
// ABS / 非ABS 二分; 规则上可为空表示不按材料类别区分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialClass {
    #[serde(rename = "ABS")]
    Abs,
    #[serde(rename = "非ABS")]
    NonAbs,
}

impl MaterialClass {
    pub fn label(&self) -> &'static str {
        match self {
            MaterialClass::Abs => "ABS",
            MaterialClass::NonAbs => "非ABS",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "ABS" => Some(MaterialClass::Abs),
            "非ABS" => Some(MaterialClass::NonAbs),
            _ => None,
        }
    }

    /// 由管板材质推导二级分类: 字面量为 "ABS" 时归为 ABS，
    /// 其余（碳钢、不锈钢等）一律归为非ABS
    pub fn from_tube_plate_material(material: &str) -> Self {
        if material.trim() == "ABS" {
            MaterialClass::Abs
        } else {
            MaterialClass::NonAbs
        }
    }
}

impl fmt::Display for MaterialClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ==========================================
// 孔底形状 (Bottom Shape) - 三级分类
// ==========================================
// 尖底/平底; 随规则与请求携带，当前不参与匹配
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BottomShape {
    #[serde(rename = "尖底")]
    Pointed, // 尖底
    #[serde(rename = "平底")]
    Flat, // 平底
}

impl BottomShape {
    pub fn label(&self) -> &'static str {
        match self {
            BottomShape::Pointed => "尖底",
            BottomShape::Flat => "平底",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "尖底" => Some(BottomShape::Pointed),
            "平底" => Some(BottomShape::Flat),
            _ => None,
        }
    }
}

impl fmt::Display for BottomShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ==========================================
// 价格年份 (Pricing Year)
// ==========================================
// 四个财年价格列 F25-F28; 请求侧兼容小写 "f28"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PricingYear {
    F25,
    F26,
    F27,
    F28,
}

impl PricingYear {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_uppercase().as_str() {
            "F25" => Some(PricingYear::F25),
            "F26" => Some(PricingYear::F26),
            "F27" => Some(PricingYear::F27),
            "F28" => Some(PricingYear::F28),
            _ => None,
        }
    }
}

impl fmt::Display for PricingYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingYear::F25 => write!(f, "F25"),
            PricingYear::F26 => write!(f, "F26"),
            PricingYear::F27 => write!(f, "F27"),
            PricingYear::F28 => write!(f, "F28"),
        }
    }
}

// ==========================================
// 螺纹类别 (Thread Kind)
// ==========================================
// 请求侧的螺纹子类，限定为两个螺纹一级分类之一
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThreadKind {
    #[serde(rename = "螺纹盲孔")]
    Blind,
    #[serde(rename = "螺纹通孔")]
    Through,
}

impl ThreadKind {
    /// 对应的一级分类
    pub fn operation_kind(&self) -> OperationKind {
        match self {
            ThreadKind::Blind => OperationKind::ThreadingBlind,
            ThreadKind::Through => OperationKind::ThreadingThrough,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "螺纹盲孔" => Some(ThreadKind::Blind),
            "螺纹通孔" => Some(ThreadKind::Through),
            _ => None,
        }
    }
}

impl fmt::Display for ThreadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.operation_kind().label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_kind_parse_roundtrip() {
        for label in ["钻孔", "抠槽", "螺纹盲孔", "螺纹通孔"] {
            let kind = OperationKind::parse(label).unwrap();
            assert_eq!(kind.label(), label);
        }
        assert_eq!(OperationKind::parse("铣削"), None);
        assert_eq!(OperationKind::parse(""), None);
    }

    #[test]
    fn test_material_class_derivation() {
        assert_eq!(
            MaterialClass::from_tube_plate_material("ABS"),
            MaterialClass::Abs
        );
        // 碳钢、不锈钢等都属于非ABS
        assert_eq!(
            MaterialClass::from_tube_plate_material("碳钢"),
            MaterialClass::NonAbs
        );
        assert_eq!(
            MaterialClass::from_tube_plate_material("不锈钢"),
            MaterialClass::NonAbs
        );
    }

    #[test]
    fn test_pricing_year_case_insensitive() {
        assert_eq!(PricingYear::parse("f28"), Some(PricingYear::F28));
        assert_eq!(PricingYear::parse("F25"), Some(PricingYear::F25));
        assert_eq!(PricingYear::parse("F29"), None);
    }

    #[test]
    fn test_thread_kind_maps_to_operation() {
        assert_eq!(
            ThreadKind::Blind.operation_kind(),
            OperationKind::ThreadingBlind
        );
        assert_eq!(
            ThreadKind::Through.operation_kind(),
            OperationKind::ThreadingThrough
        );
    }
}
