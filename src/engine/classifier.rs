// ==========================================
// 企业碳排放计算器 - 因子分类匹配引擎
// ==========================================
// 依据: GHG Protocol 范围/类别税目（1.1-1.4 直接排放, 2.1-2.2 间接排放）
// 红线: 规则表顺序执行,命中即返回
// 红线: 所有匹配决策必须输出 match_reason（JSON 格式,可解释性）
// 红线: 未匹配不是错误,置零因子随行携带,留给人工修正
// ==========================================
// 职责: 子类别+排放源 → 因子键推导 → 因子库查询 → 匹配标注
// 输入: ActivityRow + FactorRegistry
// 输出: MatchedRow
// ==========================================

use serde_json::json;
use tracing::instrument;

use crate::domain::activity::{ActivityRow, MatchStats, MatchedRow};
use crate::domain::types::{GasType, MatchStatus};
use crate::repository::factor_registry::FactorRegistry;

// ==========================================
// 常量与规则表
// ==========================================

/// 无法推导因子键时的建议键占位
pub const UNRECOGNIZED_KEY: &str = "未识别";

/// 未匹配行的因子单位占位（待人工补充）
pub const PENDING_UNIT: &str = "待补充";

/// 外购电力判定标记（排放源包含该字即视为电力）
const ELECTRICITY_MARKER: &str = "电";

/// 外购电力的全国平均兜底键
pub const NATIONAL_GRID_KEY: &str = "外购电力-全国平均";

// 子类别编号 → 因子键前缀（顺序即优先级,子串包含匹配）
// "2.1" 为特例: 排放源含"电"时固定取全国平均键,见 derive_key
const SUBCATEGORY_RULES: [(&str, &str); 6] = [
    ("1.1", "固定燃烧-"),
    ("1.2", "移动燃烧-"),
    ("1.3", "工艺排放-"),
    ("1.4", "无组织排放-"),
    ("2.1", "外购电力-"),
    ("2.2", "外购热力-"),
];

// ==========================================
// ClassifierEngine - 因子分类匹配引擎
// ==========================================
pub struct ClassifierEngine {}

impl ClassifierEngine {
    /// 创建新的分类匹配引擎
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 批量分类匹配（推荐使用）
    ///
    /// 返回与输入同序的匹配结果列表,并记录匹配统计
    #[instrument(skip(self, rows, registry), fields(count = rows.len()))]
    pub fn classify_batch(
        &self,
        rows: &[ActivityRow],
        registry: &FactorRegistry,
    ) -> Vec<MatchedRow> {
        let matched: Vec<MatchedRow> = rows
            .iter()
            .map(|row| self.classify_single(row, registry))
            .collect();

        let stats = MatchStats::from_rows(&matched);
        tracing::info!(
            total = stats.total,
            matched = stats.matched,
            unmatched = stats.unmatched,
            "因子匹配完成"
        );

        matched
    }

    /// 单行分类匹配
    ///
    /// # 返回
    /// - 命中因子库 → MATCHED,拷贝因子库条目的因子/单位/气体
    /// - 未命中 → UNMATCHED,因子=0,单位"待补充",气体默认 CO2
    pub fn classify_single(&self, row: &ActivityRow, registry: &FactorRegistry) -> MatchedRow {
        // 1. 依规则表推导因子键
        let derived = self.derive_key(&row.subcategory, &row.source);

        // 2. 因子库精确查询,命中即拷贝
        if let Some((key, rule)) = &derived {
            if let Ok(factor) = registry.lookup(key) {
                let reason = json!({
                    "rule": rule,
                    "derived_key": key,
                    "registry_hit": true,
                    "factor": factor.factor,
                });
                return MatchedRow {
                    activity: row.clone(),
                    suggested_key: factor.key.clone(),
                    matched_factor: factor.factor,
                    factor_unit: factor.unit.clone(),
                    gas_type: factor.gas_type,
                    match_status: MatchStatus::Matched,
                    match_reason: Some(reason.to_string()),
                };
            }
        }

        // 3. 未匹配: 置零因子,保留推导键供人工修正参考
        let (suggested_key, rule) = match derived {
            Some((key, rule)) => (key, rule),
            None => (UNRECOGNIZED_KEY.to_string(), "NONE"),
        };
        let reason = json!({
            "rule": rule,
            "derived_key": suggested_key,
            "registry_hit": false,
        });
        MatchedRow {
            activity: row.clone(),
            suggested_key,
            matched_factor: 0.0,
            factor_unit: PENDING_UNIT.to_string(),
            gas_type: GasType::Co2,
            match_status: MatchStatus::Unmatched,
            match_reason: Some(reason.to_string()),
        }
    }

    /// 人工修正: 改选因子库中已有的键,同步重取因子/单位/气体
    ///
    /// # 参数
    /// - row: 待修正的匹配结果行
    /// - new_key: 新选择的因子键（必须已在因子库注册）
    ///
    /// # 返回
    /// - Ok(()): 修正完成,行状态变为 MATCHED
    /// - Err(NotFound): 键不在因子库中,行保持原状不动
    pub fn apply_correction(
        &self,
        row: &mut MatchedRow,
        new_key: &str,
        registry: &FactorRegistry,
    ) -> crate::repository::error::RegistryResult<()> {
        // 单次原子编辑: 查询失败则行完全不变
        let factor = registry.lookup(new_key)?;

        let reason = json!({
            "rule": "MANUAL",
            "derived_key": factor.key,
            "registry_hit": true,
            "factor": factor.factor,
        });
        row.suggested_key = factor.key.clone();
        row.matched_factor = factor.factor;
        row.factor_unit = factor.unit.clone();
        row.gas_type = factor.gas_type;
        row.match_status = MatchStatus::Matched;
        row.match_reason = Some(reason.to_string());

        tracing::info!(
            row_number = row.activity.row_number,
            key = %new_key,
            "人工修正匹配键"
        );
        Ok(())
    }

    // ==========================================
    // 因子键推导 (规则表顺序执行)
    // ==========================================

    /// 依子类别编号推导因子键
    ///
    /// 规则（顺序执行,命中即返回）:
    /// 1) 子类别含"1.1" → "固定燃烧-"+排放源
    /// 2) 子类别含"1.2" → "移动燃烧-"+排放源
    /// 3) 子类别含"1.3" → "工艺排放-"+排放源
    /// 4) 子类别含"1.4" → "无组织排放-"+排放源
    /// 5) 子类别含"2.1" → 排放源含"电"取"外购电力-全国平均",否则"外购电力-"+排放源
    /// 6) 子类别含"2.2" → "外购热力-"+排放源
    /// 7) 其他 → None（键无法推导）
    ///
    /// 返回: (因子键, 命中的规则编号)
    fn derive_key(&self, subcategory: &str, source: &str) -> Option<(String, &'static str)> {
        for (code, key_prefix) in SUBCATEGORY_RULES {
            if !subcategory.contains(code) {
                continue;
            }
            // 特例: 外购电力统一折算到全国平均电网因子
            if code == "2.1" && source.contains(ELECTRICITY_MARKER) {
                return Some((NATIONAL_GRID_KEY.to_string(), code));
            }
            return Some((format!("{}{}", key_prefix, source), code));
        }
        None
    }
}

impl Default for ClassifierEngine {
    fn default() -> Self {
        Self::new()
    }
}
