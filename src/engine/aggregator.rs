// ==========================================
// 企业碳排放计算器 - 排放核算引擎
// ==========================================
// 依据: GHG Protocol 企业核算与报告标准 - 排放量核算
// 红线: 无状态引擎,compute 是纯函数,同输入必同输出（审计可复现）
// 红线: 汇总必须与明细逐项对账,分组合计不允许漂移
// ==========================================
// 职责: 逐行排放量计算 + 范围派生 + 分组汇总
// 输入: MatchedRow 序列
// 输出: (ComputedRow 序列, EmissionSummary)
// ==========================================

use std::collections::BTreeMap;

use tracing::instrument;

use crate::domain::activity::MatchedRow;
use crate::domain::report::{ComputedRow, EmissionSummary};
use crate::domain::types::Scope;
use crate::engine::error::{EngineError, EngineResult};

/// 直接排放判定标记（类别文本）
const DIRECT_MARKER: &str = "直接";

/// 间接排放判定标记（类别文本）
const INDIRECT_MARKER: &str = "间接";

// ==========================================
// AggregationEngine - 排放核算引擎
// ==========================================
pub struct AggregationEngine;

impl AggregationEngine {
    /// 创建新的排放核算引擎
    pub fn new() -> Self {
        Self
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 核算排放量并生成汇总
    ///
    /// # 参数
    /// - rows: 匹配结果行（未匹配行因子为 0,照常参与并贡献 0）
    ///
    /// # 返回
    /// - Ok((明细, 汇总)): 明细与输入同序
    /// - Err(InvalidCategory): 任一行类别文本无法识别,整批失败
    #[instrument(skip(self, rows), fields(count = rows.len()))]
    pub fn compute(&self, rows: &[MatchedRow]) -> EngineResult<(Vec<ComputedRow>, EmissionSummary)> {
        // 1. 逐行核算: 排放量 = 活动数据 × 因子, 范围由类别文本派生
        let mut computed = Vec::with_capacity(rows.len());
        for row in rows {
            let scope = Self::parse_scope(&row.activity.category, row.activity.row_number)?;
            let emissions_kg = row.activity.activity_quantity * row.matched_factor;
            computed.push(ComputedRow {
                matched: row.clone(),
                emissions_kg,
                emissions_tonnes: emissions_kg / 1000.0,
                scope,
            });
        }

        // 2. 分组汇总（吨口径）
        let mut total_tonnes = 0.0;
        let mut scope1_tonnes = 0.0;
        let mut scope2_tonnes = 0.0;
        let mut by_gas: BTreeMap<_, f64> = BTreeMap::new();
        let mut by_subcategory: BTreeMap<String, f64> = BTreeMap::new();

        for row in &computed {
            let t = row.emissions_tonnes;
            total_tonnes += t;
            match row.scope {
                Scope::Scope1 => scope1_tonnes += t,
                Scope::Scope2 => scope2_tonnes += t,
            }
            *by_gas.entry(row.matched.gas_type).or_insert(0.0) += t;
            *by_subcategory
                .entry(row.matched.activity.subcategory.clone())
                .or_insert(0.0) += t;
        }

        let summary = EmissionSummary {
            row_count: computed.len(),
            total_tonnes,
            scope1_tonnes,
            scope2_tonnes,
            by_gas,
            by_subcategory,
        };

        tracing::info!(
            rows = summary.row_count,
            total_tonnes = summary.total_tonnes,
            scope1_tonnes = summary.scope1_tonnes,
            scope2_tonnes = summary.scope2_tonnes,
            "排放核算完成"
        );

        Ok((computed, summary))
    }

    // ==========================================
    // 范围派生
    // ==========================================

    /// 由类别文本派生排放范围
    ///
    /// 规则（顺序执行,命中即返回）:
    /// 1) 类别含"直接" → 范围一
    /// 2) 类别含"间接" → 范围二
    /// 3) 其他 → InvalidCategory（不得静默归入范围二）
    pub fn parse_scope(category: &str, row_number: usize) -> EngineResult<Scope> {
        if category.contains(DIRECT_MARKER) {
            return Ok(Scope::Scope1);
        }
        if category.contains(INDIRECT_MARKER) {
            return Ok(Scope::Scope2);
        }
        Err(EngineError::InvalidCategory {
            row_number,
            category: category.to_string(),
        })
    }
}

impl Default for AggregationEngine {
    fn default() -> Self {
        Self::new()
    }
}
