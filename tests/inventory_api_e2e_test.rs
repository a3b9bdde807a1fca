// ==========================================
// API 集成测试: 人工修正 + 自定义因子 + 对账不变量
// ==========================================


use std::sync::{Arc, RwLock};

use carbon_inventory::api::{ApiError, FactorApi, InventoryApi};
use carbon_inventory::domain::types::MatchStatus;
use carbon_inventory::logging;
use carbon_inventory::repository::FactorRegistry;
use test_helpers::{header_line, make_activity_row, write_csv};

const DIRECT: &str = "范围一：直接温室气体排放";
const INDIRECT: &str = "范围二：间接温室气体排放";

fn shared_apis() -> (FactorApi, InventoryApi) {
    let registry = Arc::new(RwLock::new(FactorRegistry::with_defaults()));
    (
        FactorApi::new(registry.clone()),
        InventoryApi::new(registry),
    )
}

#[test]
fn test_scenario_1_correction_then_recompute() {
    // 场景1: 未匹配行经人工修正后参与核算
    logging::init_test();

    let file = write_csv(&[
        header_line(),
        "范围一：直接温室气体排放,1.1 固定燃烧,生物质,锅炉,2000,kg",
    ]);

    let (_, api) = shared_apis();
    let (_, mut matched, stats) = api.import_and_classify(file.path()).unwrap();
    assert_eq!(stats.unmatched, 1);
    assert_eq!(matched[0].suggested_key, "固定燃烧-生物质", "推导键保留供修正参考");

    api.correct_row(&mut matched, 0, "固定燃烧-煤炭").unwrap();
    assert_eq!(matched[0].match_status, MatchStatus::Matched);
    assert_eq!(matched[0].matched_factor, 2.38);
    assert_eq!(matched[0].factor_unit, "kgCO2/kg");

    let (_, summary) = api.compute(&matched).unwrap();
    assert!((summary.total_tonnes - 2000.0 * 2.38 / 1000.0).abs() < 1e-12);
}

#[test]
fn test_scenario_2_custom_factor_enables_match_on_reclassify() {
    // 场景2: 注册自定义因子后重新匹配即命中（注册对后续查询立即可见）
    let (factor_api, inventory_api) = shared_apis();

    let rows = vec![make_activity_row(DIRECT, "1.1 固定燃烧", "生物质", 500.0, 2)];
    let matched = inventory_api.classify(&rows).unwrap();
    assert_eq!(matched[0].match_status, MatchStatus::Unmatched);

    factor_api
        .add_factor("固定燃烧-生物质", 1.5, "kgCO2/kg", "CO2")
        .unwrap();

    let matched = inventory_api.classify(&rows).unwrap();
    assert_eq!(matched[0].match_status, MatchStatus::Matched);
    assert_eq!(matched[0].matched_factor, 1.5);
}

#[test]
fn test_scenario_3_correction_to_deleted_key_fails_cleanly() {
    // 场景3: 修正键不在因子库 → InvalidSelection,行保持原状
    let (_, api) = shared_apis();

    let rows = vec![make_activity_row(DIRECT, "1.1 固定燃烧", "天然气", 100.0, 2)];
    let mut matched = api.classify(&rows).unwrap();
    let before = matched[0].clone();

    let err = api.correct_row(&mut matched, 0, "外购电力-月球基地").unwrap_err();
    assert!(matches!(err, ApiError::InvalidSelection { ref key } if key == "外购电力-月球基地"));
    assert_eq!(matched[0], before);
}

#[test]
fn test_scenario_4_reconciliation_holds_on_mixed_dataset() {
    // 场景4: 混合气体/范围/未匹配的数据集,分组合计与总量对账一致
    let (_, api) = shared_apis();

    let rows = vec![
        make_activity_row(DIRECT, "1.1 固定燃烧", "天然气", 1239138.0, 2),
        make_activity_row(DIRECT, "1.2 移动燃烧", "柴油", 380.5, 3),
        make_activity_row(DIRECT, "1.4 无组织排放", "R32", 1.75, 4),
        make_activity_row(DIRECT, "1.4 无组织排放", "甲烷(化粪池)", 12.0, 5),
        make_activity_row(INDIRECT, "2.1 外购电力", "外购市政电", 987654.0, 6),
        make_activity_row(INDIRECT, "2.2 外购热力", "蒸汽", 321.0, 7),
        make_activity_row(DIRECT, "9.9 其他", "神秘气体", 5.0, 8),
    ];

    let matched = api.classify(&rows).unwrap();
    let (computed, summary) = api.compute(&matched).unwrap();

    assert_eq!(computed.len(), 7);
    assert!(summary.is_reconciled(), "Σ范围 == Σ气体 == Σ子类别 == 总量");

    // 按气体分组覆盖 CO2/CH4/HFCs 三类
    assert_eq!(summary.by_gas.len(), 3);
    // 子类别分组覆盖六个编号子组（9.9 也是一组）
    assert_eq!(summary.by_subcategory.len(), 6);
}

#[test]
fn test_scenario_5_invalid_category_surfaces_row_number() {
    // 场景5: 类别文本无法识别 → 整批核算失败并携带行号
    let (_, api) = shared_apis();

    let rows = vec![
        make_activity_row(DIRECT, "1.1 固定燃烧", "天然气", 100.0, 2),
        make_activity_row("生物圈排放", "1.1 固定燃烧", "天然气", 100.0, 3),
    ];
    let matched = api.classify(&rows).unwrap();

    let err = api.compute(&matched).unwrap_err();
    match err {
        ApiError::ComputeFailure(msg) => {
            assert!(msg.contains("row=3"), "错误信息应携带行号: {}", msg);
            assert!(msg.contains("生物圈排放"));
        }
        other => panic!("期望 ComputeFailure, 实际 {:?}", other),
    }
}

#[test]
fn test_scenario_6_all_unmatched_dataset_fails_share_computation() {
    // 场景6: 全未匹配数据集总量为 0 → 占比计算报 DivideByZero
    let (_, api) = shared_apis();

    let rows = vec![make_activity_row(DIRECT, "9.9 其他", "神秘气体", 10.0, 2)];
    let matched = api.classify(&rows).unwrap();
    let (computed, summary) = api.compute(&matched).unwrap();
    assert_eq!(summary.total_tonnes, 0.0);

    let err = api.assemble(&computed, &summary).unwrap_err();
    assert!(matches!(err, ApiError::ComputeFailure(_)));
    assert!(err.to_string().contains("总排放量为 0"));
}
