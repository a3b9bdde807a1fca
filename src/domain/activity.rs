// ==========================================
// 企业碳排放计算器 - 活动数据领域模型
// ==========================================
// 依据: GHG Protocol 企业核算与报告标准 - 活动数据口径
// ==========================================

use crate::domain::types::{GasType, MatchStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// ActivityRow - 活动数据行
// ==========================================
// 用途: 导入层写入,引擎层只读
// 列对齐: 类别/子类别/排放源/设施/活动数据/计量单位
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRow {
    pub category: String,            // 类别（"范围一：直接…"/"范围二：间接…"）
    pub subcategory: String,         // 子类别（编号子组,如"1.1 固定燃烧"）
    pub source: String,              // 排放源（如"天然气"）
    pub facility_or_process: String, // 设施/过程（如"燃气锅炉"）
    pub activity_quantity: f64,      // 活动数据（数值,单位见 unit）
    pub unit: String,                // 计量单位（如"m³"/"kWh"）

    // 元信息
    pub row_number: usize, // 原始文件行号（1 起,用于报错与审计）
}

// ==========================================
// MatchedRow - 因子匹配结果行
// ==========================================
// 用途: 分类引擎输出;人工修正仅允许改选因子库中已有的键,
//       且修正时必须同步重取因子/单位/气体（单次原子编辑）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedRow {
    pub activity: ActivityRow, // 源活动数据行

    pub suggested_key: String,     // 建议排放源键（未识别时为"未识别"）
    pub matched_factor: f64,       // 匹配到的因子值（未匹配时为 0）
    pub factor_unit: String,       // 因子单位（未匹配时为"待补充"）
    pub gas_type: GasType,         // 温室气体类型（未匹配时默认 CO2）
    pub match_status: MatchStatus, // 匹配状态
    pub match_reason: Option<String>, // 匹配依据（JSON 格式,可解释性）
}

// ==========================================
// UploadBatch - 上传批次
// ==========================================
// 用途: 记录一次活动数据导入的元信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadBatch {
    pub batch_id: String,           // 批次 ID（UUID）
    pub file_name: String,          // 源文件名
    pub total_rows: usize,          // 导入行数（不含表头,不含全空行）
    pub imported_at: DateTime<Utc>, // 导入时间
    pub elapsed_ms: u64,            // 导入耗时（毫秒）
}

// ==========================================
// MatchStats - 匹配统计
// ==========================================
// 用途: 批量分类后的概览指标（总数/已匹配/未匹配）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStats {
    pub total: usize,
    pub matched: usize,
    pub unmatched: usize,
}

impl MatchStats {
    /// 从匹配结果集合统计
    pub fn from_rows(rows: &[MatchedRow]) -> Self {
        let matched = rows
            .iter()
            .filter(|r| r.match_status == MatchStatus::Matched)
            .count();
        Self {
            total: rows.len(),
            matched,
            unmatched: rows.len() - matched,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_row(status: MatchStatus) -> MatchedRow {
        MatchedRow {
            activity: ActivityRow {
                category: "范围一：直接温室气体排放".to_string(),
                subcategory: "1.1 固定燃烧".to_string(),
                source: "天然气".to_string(),
                facility_or_process: "燃气锅炉".to_string(),
                activity_quantity: 100.0,
                unit: "m³".to_string(),
                row_number: 2,
            },
            suggested_key: "固定燃烧-天然气".to_string(),
            matched_factor: 2.1622,
            factor_unit: "kgCO2/m3".to_string(),
            gas_type: GasType::Co2,
            match_status: status,
            match_reason: None,
        }
    }

    #[test]
    fn test_match_stats_counts() {
        let rows = vec![
            make_row(MatchStatus::Matched),
            make_row(MatchStatus::Unmatched),
            make_row(MatchStatus::Matched),
        ];
        let stats = MatchStats::from_rows(&rows);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.matched, 2);
        assert_eq!(stats.unmatched, 1);
    }

    #[test]
    fn test_match_stats_empty() {
        let stats = MatchStats::from_rows(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.matched, 0);
        assert_eq!(stats.unmatched, 0);
    }
}
