// ==========================================
// 企业碳排放计算器 - 报告组装引擎
// ==========================================
// 红线: 只搬运核算结果,不重新计算排放量（防止汇总与明细漂移）
// 红线: 百分比与两位小数的格式规则只在本模块出现一次
// ==========================================
// 职责: (ComputedRow 序列, EmissionSummary) → 报告包
// 输出: 明细表 + 汇总表 + 范围占比 + 一句话结论
// ==========================================

use tracing::instrument;

use crate::domain::report::{ComputedRow, DetailRow, EmissionSummary, ReportBundle, ScopeShare, SummaryRow};
use crate::domain::types::Scope;
use crate::engine::error::{EngineError, EngineResult};

/// 汇总表的总量行标签
const TOTAL_LABEL: &str = "总量";

// ==========================================
// ReportAssembler - 报告组装引擎
// ==========================================
pub struct ReportAssembler;

impl ReportAssembler {
    /// 创建新的报告组装引擎
    pub fn new() -> Self {
        Self
    }

    /// 组装报告包
    ///
    /// # 参数
    /// - computed: 核算明细行
    /// - summary: 排放汇总（数值原样搬运,不重新累加）
    ///
    /// # 返回
    /// - Ok(ReportBundle)
    /// - Err(DivideByZero): 总排放量为 0,占比无定义
    #[instrument(skip(self, computed, summary), fields(count = computed.len()))]
    pub fn assemble(
        &self,
        computed: &[ComputedRow],
        summary: &EmissionSummary,
    ) -> EngineResult<ReportBundle> {
        // 1. 范围占比（先校验分母,失败则不产出任何部分结果）
        if summary.total_tonnes == 0.0 {
            return Err(EngineError::DivideByZero);
        }
        let scope_shares = vec![
            ScopeShare {
                scope: Scope::Scope1,
                tonnes: summary.scope1_tonnes,
                percent: summary.scope1_tonnes / summary.total_tonnes * 100.0,
            },
            ScopeShare {
                scope: Scope::Scope2,
                tonnes: summary.scope2_tonnes,
                percent: summary.scope2_tonnes / summary.total_tonnes * 100.0,
            },
        ];

        // 2. 明细表（标签列转为中文文本,数值原样）
        let detail_rows = computed.iter().map(Self::to_detail_row).collect();

        // 3. 汇总表（范围一/范围二/总量,数值原样搬运）
        let summary_rows = vec![
            SummaryRow {
                label: Scope::Scope1.label_zh().to_string(),
                tonnes: summary.scope1_tonnes,
            },
            SummaryRow {
                label: Scope::Scope2.label_zh().to_string(),
                tonnes: summary.scope2_tonnes,
            },
            SummaryRow {
                label: TOTAL_LABEL.to_string(),
                tonnes: summary.total_tonnes,
            },
        ];

        // 4. 一句话结论（两位小数的格式规则仅此一处）
        let headline = format!("总排放量: {:.2} tCO₂e", summary.total_tonnes);

        Ok(ReportBundle {
            detail_rows,
            summary_rows,
            scope_shares,
            headline,
        })
    }

    fn to_detail_row(row: &ComputedRow) -> DetailRow {
        let activity = &row.matched.activity;
        DetailRow {
            category: activity.category.clone(),
            subcategory: activity.subcategory.clone(),
            source: activity.source.clone(),
            facility_or_process: activity.facility_or_process.clone(),
            activity_quantity: activity.activity_quantity,
            unit: activity.unit.clone(),
            suggested_key: row.matched.suggested_key.clone(),
            factor: row.matched.matched_factor,
            factor_unit: row.matched.factor_unit.clone(),
            gas_type: row.matched.gas_type.as_str().to_string(),
            match_status: row.matched.match_status.label_zh().to_string(),
            match_reason: row.matched.match_reason.clone(),
            emissions_kg: row.emissions_kg,
            emissions_tonnes: row.emissions_tonnes,
            scope: row.scope.label_zh().to_string(),
        }
    }
}

impl Default for ReportAssembler {
    fn default() -> Self {
        Self::new()
    }
}
