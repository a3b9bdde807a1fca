// ==========================================
// 企业碳排放计算器 - 核算结果领域模型
// ==========================================
// 红线: 汇总是派生视图,永不独立存储;汇总与明细不允许出现数字漂移
// ==========================================

use crate::domain::activity::MatchedRow;
use crate::domain::types::{GasType, Scope};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 分组合计与总量的相对误差容限
pub const RECONCILE_REL_TOL: f64 = 1e-9;

// ==========================================
// ComputedRow - 核算结果行
// ==========================================
// 红线: 计算是幂等纯函数,同输入必同输出
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedRow {
    pub matched: MatchedRow, // 匹配结果行

    pub emissions_kg: f64,     // 排放量 = 活动数据 × 因子（kgCO2e）
    pub emissions_tonnes: f64, // 排放量（tCO2e）= kg / 1000
    pub scope: Scope,          // 排放范围（由类别文本派生）
}

// ==========================================
// EmissionSummary - 排放汇总
// ==========================================
// 分组使用 BTreeMap,保证同输入的序列化结果逐字节一致
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionSummary {
    pub row_count: usize,                      // 参与核算的行数
    pub total_tonnes: f64,                     // 总排放量（tCO2e）
    pub scope1_tonnes: f64,                    // 范围一合计（tCO2e）
    pub scope2_tonnes: f64,                    // 范围二合计（tCO2e）
    pub by_gas: BTreeMap<GasType, f64>,        // 按气体分组（tCO2e）
    pub by_subcategory: BTreeMap<String, f64>, // 按子类别分组（tCO2e）
}

impl EmissionSummary {
    /// 校验各分组合计与总量是否对账一致（相对误差 ≤ RECONCILE_REL_TOL）
    pub fn is_reconciled(&self) -> bool {
        self.max_group_deviation() <= RECONCILE_REL_TOL
    }

    /// 各分组合计相对总量的最大相对偏差
    pub fn max_group_deviation(&self) -> f64 {
        let scope_sum = self.scope1_tonnes + self.scope2_tonnes;
        let gas_sum: f64 = self.by_gas.values().sum();
        let subcat_sum: f64 = self.by_subcategory.values().sum();

        [scope_sum, gas_sum, subcat_sum]
            .iter()
            .map(|sum| relative_deviation(*sum, self.total_tonnes))
            .fold(0.0, f64::max)
    }
}

fn relative_deviation(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs();
    let scale = b.abs().max(1.0);
    diff / scale
}

// ==========================================
// 报告结构 (Report Bundle)
// ==========================================
// 红线: 组装只搬运聚合结果,不得重新计算排放量

/// 明细表行（导出口径,标签列已转为中文文本）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailRow {
    pub category: String,            // 类别
    pub subcategory: String,         // 子类别
    pub source: String,              // 排放源
    pub facility_or_process: String, // 设施/过程
    pub activity_quantity: f64,      // 活动数据
    pub unit: String,                // 计量单位
    pub suggested_key: String,       // 建议排放源类型
    pub factor: f64,                 // 排放因子
    pub factor_unit: String,         // 因子单位
    pub gas_type: String,            // 温室气体类型
    pub match_status: String,        // 匹配状态（已匹配/未匹配）
    pub match_reason: Option<String>, // 匹配依据（JSON,审计口径,不进导出列）
    pub emissions_kg: f64,           // 排放量（kgCO2e）
    pub emissions_tonnes: f64,       // 排放量（tCO2e）
    pub scope: String,               // 范围（范围一/范围二）
}

/// 汇总表行（范围一/范围二/总量）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub label: String, // 行标签
    pub tonnes: f64,   // 排放量（tCO2e）
}

/// 范围占比（用于报告页/幻灯片口径）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopeShare {
    pub scope: Scope,
    pub tonnes: f64,
    pub percent: f64, // scope / total × 100
}

/// 报告包: 明细表 + 汇总表 + 范围占比 + 一句话结论
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportBundle {
    pub detail_rows: Vec<DetailRow>,
    pub summary_rows: Vec<SummaryRow>,
    pub scope_shares: Vec<ScopeShare>,
    pub headline: String, // 如"总排放量: 3630.85 tCO₂e"
}
