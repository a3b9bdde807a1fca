// ==========================================
// 企业碳排放计算器 - 排放因子领域模型
// ==========================================
// 依据: IPCC 2006 国家温室气体清单指南 - 缺省排放因子
// 依据: 生态环境部 2022 年度全国电网平均排放因子公告
// ==========================================

use crate::domain::types::GasType;
use serde::{Deserialize, Serialize};

// ==========================================
// EmissionFactor - 排放因子
// ==========================================
// 红线: 创建后不可变,唯一归属因子库;修正只能通过同键覆盖注册
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionFactor {
    pub key: String,       // 排放源键（唯一,人类可读,如"固定燃烧-天然气"）
    pub factor: f64,       // 因子值（用户注册时必须 > 0）
    pub unit: String,      // 因子单位（分母为活动数据单位,如"kgCO2/kg"）
    pub gas_type: GasType, // 温室气体类型
}

impl EmissionFactor {
    pub fn new(key: impl Into<String>, factor: f64, unit: impl Into<String>, gas_type: GasType) -> Self {
        Self {
            key: key.into(),
            factor,
            unit: unit.into(),
            gas_type,
        }
    }
}
