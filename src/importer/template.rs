// ==========================================
// 管板加工报价系统 - 单价表下载模板
// ==========================================
// 职责: 暴露模板表头与示例行，供 Web 层生成可下载模板文件，
//       列序即导入时的固定列序
// ==========================================

/// 模板表头（13 列，顺序固定）
pub const TEMPLATE_HEADERS: [&str; 13] = [
    "一级分类",
    "二级分类",
    "三级分类",
    "材质",
    "厚度",
    "最小孔径",
    "最大孔径",
    "最小孔数",
    "最大孔数",
    "F25价格",
    "F26价格",
    "F27价格",
    "F28价格",
];

/// 模板示例行（覆盖三种一级分类的典型填法）
pub fn template_sample_rows() -> Vec<Vec<String>> {
    vec![
        vec![
            "钻孔", "ABS", "尖底", "不锈钢", "5.0", "9.7", "15.0", "4", "20", "2.50", "3.00",
            "3.50", "4.00",
        ],
        vec![
            "抠槽", "非ABS", "平底", "普通材质", "8.0", "12.0", "25.0", "6", "50", "1.80",
            "2.20", "2.80", "3.20",
        ],
        vec![
            "螺纹盲孔", "ABS", "尖底", "09MnNiDⅢ", "10.0", "16.0", "30.0", "8", "100", "3.20",
            "3.80", "4.50", "5.20",
        ],
    ]
    .into_iter()
    .map(|row| row.into_iter().map(String::from).collect())
    .collect()
}
