// ==========================================
// 报价引擎集成测试
// ==========================================
// 覆盖: 匹配语义 / 小计与总价 / 快照确定性
// ==========================================

mod helpers;

use helpers::{abs_threading_rule, dec, non_abs_grooving_rule, stainless_drilling_rule};
use tube_plate_quote::{
    DrillingParams, GroovingParams, OperationKind, PriceMatcher, PricingYear, QuotationResolver,
    QuoteSpec, RuleStore, ThreadKind, ThreadingParams,
};

// ==========================================
// 规格书示例场景
// ==========================================

// 场景1: 钻孔全条件命中 => 单价 2.50，10孔 => 小计 25.00
#[test]
fn test_scenario_drilling_full_match() {
    helpers::init_test_logging();
    let mut store = RuleStore::new();
    store.insert(stainless_drilling_rule());
    let snapshot = store.snapshot();

    let mut spec = QuoteSpec::new(PricingYear::F25);
    spec.drilling = Some(DrillingParams {
        tube_plate_material: Some("不锈钢".to_string()),
        thickness: Some(dec("5")),
        hole_diameter: Some(dec("12")),
        hole_count: Some(10),
        ..Default::default()
    });

    let result = QuotationResolver::resolve_quote(&spec, snapshot.rules());
    let item = result.item(OperationKind::Drilling).unwrap();
    assert_eq!(item.unit_price, Some(dec("2.50")));
    assert_eq!(item.subtotal, dec("25.00"));
    assert_eq!(result.grand_total, dec("25.00"));
}

// 场景2: 孔径16超出[9.7,15.0] => 单价空，小计0
#[test]
fn test_scenario_diameter_out_of_range() {
    let mut store = RuleStore::new();
    store.insert(stainless_drilling_rule());
    let snapshot = store.snapshot();

    let mut spec = QuoteSpec::new(PricingYear::F25);
    spec.drilling = Some(DrillingParams {
        hole_diameter: Some(dec("16")),
        hole_count: Some(10),
        ..Default::default()
    });

    let result = QuotationResolver::resolve_quote(&spec, snapshot.rules());
    let item = result.item(OperationKind::Drilling).unwrap();
    assert_eq!(item.unit_price, None);
    assert_eq!(item.subtotal, dec("0"));
}

// 场景4: ABS 螺纹规则 + 碳钢管板 => 落入非ABS分支 => 不命中
#[test]
fn test_scenario_threading_carbon_steel_misses_abs_rule() {
    let mut store = RuleStore::new();
    store.insert(abs_threading_rule());
    let snapshot = store.snapshot();

    let mut params = ThreadingParams::new(ThreadKind::Blind);
    params.tube_plate_material = Some("碳钢".to_string());
    params.thread_spec = Some("M20".to_string());
    params.hole_count = Some(8);

    assert_eq!(
        PriceMatcher::resolve_threading(&params, PricingYear::F28, snapshot.rules()),
        None
    );
}

// ==========================================
// 可测性质
// ==========================================

// P1: 同一快照同一请求 => 结果恒定
#[test]
fn test_determinism_over_snapshot() {
    let mut store = RuleStore::new();
    store.insert(stainless_drilling_rule());
    store.insert(abs_threading_rule());
    store.insert(non_abs_grooving_rule());
    let snapshot = store.snapshot();

    let mut spec = QuoteSpec::new(PricingYear::F28);
    spec.drilling = Some(DrillingParams {
        hole_diameter: Some(dec("10")),
        hole_count: Some(5),
        ..Default::default()
    });
    let mut threading = ThreadingParams::new(ThreadKind::Blind);
    threading.tube_plate_material = Some("ABS".to_string());
    threading.thread_spec = Some("M24".to_string());
    threading.hole_count = Some(12);
    spec.threading = Some(threading);
    spec.grooving = Some(GroovingParams {
        tube_plate_material: Some("碳钢".to_string()),
        hole_count: Some(20),
        ..Default::default()
    });

    let first = QuotationResolver::resolve_quote(&spec, snapshot.rules());
    for _ in 0..10 {
        assert_eq!(
            QuotationResolver::resolve_quote(&spec, snapshot.rules()),
            first
        );
    }
}

// P2: 所有参数都落在目录外 => 各项皆空，不 panic
#[test]
fn test_no_match_never_panics() {
    let mut store = RuleStore::new();
    store.insert(stainless_drilling_rule());
    let snapshot = store.snapshot();

    let mut spec = QuoteSpec::new(PricingYear::F28);
    spec.drilling = Some(DrillingParams {
        material_description: Some("未知描述".to_string()),
        thickness: Some(dec("99")),
        hole_diameter: Some(dec("999")),
        hole_count: Some(100000),
        ..Default::default()
    });
    let mut threading = ThreadingParams::new(ThreadKind::Through);
    threading.thread_spec = Some("M999".to_string());
    spec.threading = Some(threading);
    spec.grooving = Some(GroovingParams {
        hole_count: Some(0),
        ..Default::default()
    });

    let result = QuotationResolver::resolve_quote(&spec, snapshot.rules());
    assert!(result.items.iter().all(|i| i.unit_price.is_none()));
    assert_eq!(result.grand_total, dec("0"));
}

// P6: 恰好等于区间端点 => 命中
#[test]
fn test_range_bounds_inclusive() {
    let mut store = RuleStore::new();
    store.insert(stainless_drilling_rule());
    let snapshot = store.snapshot();

    for diameter in ["9.7", "15.0"] {
        let params = DrillingParams {
            hole_diameter: Some(dec(diameter)),
            ..Default::default()
        };
        assert_eq!(
            PriceMatcher::resolve_drilling(&params, PricingYear::F25, snapshot.rules()),
            Some(dec("2.50")),
            "端点 {} 应命中",
            diameter
        );
    }
    for count in [4, 20] {
        let params = DrillingParams {
            hole_count: Some(count),
            ..Default::default()
        };
        assert_eq!(
            PriceMatcher::resolve_drilling(&params, PricingYear::F25, snapshot.rules()),
            Some(dec("2.50")),
            "端点孔数 {} 应命中",
            count
        );
    }
}

// P4 延伸: 多加工项的总价 = 小计精确和
#[test]
fn test_grand_total_sums_all_present_items() {
    let mut store = RuleStore::new();
    store.insert(stainless_drilling_rule());
    store.insert(abs_threading_rule());
    store.insert(non_abs_grooving_rule());
    let snapshot = store.snapshot();

    // F28 下钻孔规则无价 => 钻孔项单价空、小计0，但仍出现在结果里
    let mut spec = QuoteSpec::new(PricingYear::F28);
    spec.drilling = Some(DrillingParams {
        hole_diameter: Some(dec("12")),
        hole_count: Some(10),
        ..Default::default()
    });
    let mut threading = ThreadingParams::new(ThreadKind::Blind);
    threading.tube_plate_material = Some("ABS".to_string());
    threading.thread_spec = Some("M20".to_string());
    threading.hole_count = Some(8);
    spec.threading = Some(threading);
    spec.grooving = Some(GroovingParams {
        tube_plate_material: Some("不锈钢".to_string()),
        hole_count: Some(30),
        ..Default::default()
    });

    let result = QuotationResolver::resolve_quote(&spec, snapshot.rules());
    assert_eq!(result.items.len(), 3);

    let drilling = result.item(OperationKind::Drilling).unwrap();
    assert_eq!(drilling.unit_price, None);
    assert_eq!(drilling.subtotal, dec("0"));

    let threading = result.item(OperationKind::ThreadingBlind).unwrap();
    assert_eq!(threading.subtotal, dec("25.60")); // 3.20 * 8

    let grooving = result.item(OperationKind::Grooving).unwrap();
    assert_eq!(grooving.subtotal, dec("54.00")); // 1.80 * 30

    assert_eq!(result.grand_total, dec("79.60"));
}

// 平手裁决: 录入序靠前者胜，后续编辑不改变既有顺序
#[test]
fn test_tie_break_follows_insertion_order_across_edits() {
    let mut store = RuleStore::new();
    let mut cheap = stainless_drilling_rule();
    cheap.prices.f25 = Some(dec("1.00"));
    let first_id = store.insert(cheap);
    store.insert(stainless_drilling_rule()); // 同条件，F25=2.50

    let params = DrillingParams {
        hole_diameter: Some(dec("12")),
        ..Default::default()
    };
    let snapshot = store.snapshot();
    assert_eq!(
        PriceMatcher::resolve_drilling(&params, PricingYear::F25, snapshot.rules()),
        Some(dec("1.00"))
    );

    // 原位更新首条规则后依旧是首条胜出
    let mut updated = stainless_drilling_rule();
    updated.prices.f25 = Some(dec("0.50"));
    store.update(first_id, updated).unwrap();
    let snapshot = store.snapshot();
    assert_eq!(
        PriceMatcher::resolve_drilling(&params, PricingYear::F25, snapshot.rules()),
        Some(dec("0.50"))
    );
}
