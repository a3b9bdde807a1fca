// ==========================================
// 企业碳排放计算器 - 领域类型定义
// ==========================================
// 依据: GHG Protocol 企业核算与报告标准 - 范围划分
// 依据: IPCC 2006 国家温室气体清单指南 - 气体种类
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 温室气体类型 (Gas Type)
// ==========================================
// 序列化格式与因子库 JSON 文件一致
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GasType {
    #[serde(rename = "CO2")]
    Co2, // 二氧化碳
    #[serde(rename = "CH4")]
    Ch4, // 甲烷
    #[serde(rename = "N2O")]
    N2o, // 氧化亚氮
    #[serde(rename = "HFCs")]
    Hfcs, // 氢氟碳化物（制冷剂）
}

impl fmt::Display for GasType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GasType::Co2 => write!(f, "CO2"),
            GasType::Ch4 => write!(f, "CH4"),
            GasType::N2o => write!(f, "N2O"),
            GasType::Hfcs => write!(f, "HFCs"),
        }
    }
}

impl GasType {
    /// 从字符串解析气体类型
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "CO2" => Some(GasType::Co2),
            "CH4" => Some(GasType::Ch4),
            "N2O" => Some(GasType::N2o),
            "HFCs" => Some(GasType::Hfcs),
            _ => None,
        }
    }

    /// 转换为导出文件中的字符串
    pub fn as_str(&self) -> &'static str {
        match self {
            GasType::Co2 => "CO2",
            GasType::Ch4 => "CH4",
            GasType::N2o => "N2O",
            GasType::Hfcs => "HFCs",
        }
    }
}

// ==========================================
// 排放范围 (Emission Scope)
// ==========================================
// 红线: 二值枚举,类别文本无法识别时必须报错,不得默认落入范围二
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Scope {
    #[serde(rename = "SCOPE_1")]
    Scope1, // 范围一: 直接排放（燃烧/工艺/无组织）
    #[serde(rename = "SCOPE_2")]
    Scope2, // 范围二: 间接排放（外购电力/热力）
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Scope1 => write!(f, "SCOPE_1"),
            Scope::Scope2 => write!(f, "SCOPE_2"),
        }
    }
}

impl Scope {
    /// 中文显示标签（汇总表与明细表的"范围"列）
    pub fn label_zh(&self) -> &'static str {
        match self {
            Scope::Scope1 => "范围一",
            Scope::Scope2 => "范围二",
        }
    }
}

// ==========================================
// 匹配状态 (Match Status)
// ==========================================
// 红线: 未匹配是数据状态而非错误,必须随行携带并对人可见
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    Matched,   // 已匹配到因子库
    Unmatched, // 未匹配（因子=0,待人工修正）
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchStatus::Matched => write!(f, "MATCHED"),
            MatchStatus::Unmatched => write!(f, "UNMATCHED"),
        }
    }
}

impl MatchStatus {
    /// 中文显示标签（导出文件的"匹配状态"列）
    pub fn label_zh(&self) -> &'static str {
        match self {
            MatchStatus::Matched => "已匹配",
            MatchStatus::Unmatched => "未匹配",
        }
    }
}
