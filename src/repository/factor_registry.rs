// ==========================================
// 企业碳排放计算器 - 排放因子库
// ==========================================
// 职责: 排放源键 → {因子值,单位,气体类型} 的会话内唯一事实层
// 红线: 因子库是显式对象,由调用方传入引擎;禁止环境全局状态
// 红线: 条目只增不减;同键重复注册为覆盖（后注册者生效,用于修正错误因子）
// ==========================================

use std::collections::HashMap;

use crate::domain::factor::EmissionFactor;
use crate::domain::types::GasType;
use crate::repository::error::{RegistryError, RegistryResult};

// ==========================================
// 内置因子库
// ==========================================
// 依据: IPCC 2006 缺省因子 + 生态环境部全国电网平均因子
// 顺序即 list() 的枚举顺序
const BUILT_IN_FACTORS: [(&str, f64, &str, GasType); 15] = [
    ("固定燃烧-天然气", 2.1622, "kgCO2/m3", GasType::Co2),
    ("固定燃烧-煤炭", 2.38, "kgCO2/kg", GasType::Co2),
    ("固定燃烧-柴油", 3.0959, "kgCO2/kg", GasType::Co2),
    ("固定燃烧-汽油", 2.9251, "kgCO2/kg", GasType::Co2),
    ("移动燃烧-汽油", 2.9251, "kgCO2/kg", GasType::Co2),
    ("移动燃烧-柴油", 3.0959, "kgCO2/kg", GasType::Co2),
    ("工艺排放-丙烷", 2.9761, "kgCO2/kg", GasType::Co2),
    ("工艺排放-二氧化碳", 1.0, "kgCO2/kg", GasType::Co2),
    ("无组织排放-R410A", 2088.0, "kgCO2e/kg", GasType::Hfcs),
    ("无组织排放-R32", 675.0, "kgCO2e/kg", GasType::Hfcs),
    ("无组织排放-甲烷(化粪池)", 22.4, "kgCO2e/kgBOD", GasType::Ch4),
    ("外购电力-全国平均", 0.5703, "kgCO2/kWh", GasType::Co2),
    ("外购电力-华北区域", 0.8843, "kgCO2/kWh", GasType::Co2),
    ("外购电力-华东区域", 0.7035, "kgCO2/kWh", GasType::Co2),
    ("外购热力-蒸汽", 110.0, "kgCO2/GJ", GasType::Co2),
];

// ==========================================
// FactorRegistry - 排放因子库
// ==========================================
/// 内存态因子库
///
/// 插入顺序保序: list() 的枚举顺序即注册顺序,同键覆盖保留原位置
#[derive(Debug, Clone, Default)]
pub struct FactorRegistry {
    entries: Vec<EmissionFactor>,
    index: HashMap<String, usize>,
}

impl FactorRegistry {
    /// 创建空因子库
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// 创建预置内置因子的因子库
    ///
    /// # 返回
    /// - 按 BUILT_IN_FACTORS 顺序预置 15 条因子的因子库
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for (key, factor, unit, gas_type) in BUILT_IN_FACTORS {
            registry.insert(EmissionFactor::new(key, factor, unit, gas_type));
        }
        registry
    }

    /// 注册排放因子
    ///
    /// # 参数
    /// - key: 排放源键（非空）
    /// - factor: 因子值（必须 > 0）
    /// - unit: 因子单位（非空）
    /// - gas_type: 温室气体类型
    ///
    /// # 返回
    /// - Ok(()): 注册成功（同键覆盖旧值,保留原枚举位置）
    /// - Err(InvalidFactor): 校验失败,因子库不变
    pub fn add(
        &mut self,
        key: &str,
        factor: f64,
        unit: &str,
        gas_type: GasType,
    ) -> RegistryResult<()> {
        if key.trim().is_empty() {
            return Err(RegistryError::InvalidFactor {
                field: "key".to_string(),
                message: "排放源键不能为空".to_string(),
            });
        }
        if factor <= 0.0 {
            return Err(RegistryError::InvalidFactor {
                field: "factor".to_string(),
                message: format!("因子值必须大于 0, 实际为 {}", factor),
            });
        }
        if unit.trim().is_empty() {
            return Err(RegistryError::InvalidFactor {
                field: "unit".to_string(),
                message: "因子单位不能为空".to_string(),
            });
        }

        self.insert(EmissionFactor::new(key, factor, unit, gas_type));
        tracing::debug!(key = %key, factor = factor, "注册排放因子");
        Ok(())
    }

    /// 精确查询排放因子（区分大小写,不做模糊匹配）
    pub fn lookup(&self, key: &str) -> RegistryResult<&EmissionFactor> {
        self.index
            .get(key)
            .map(|&i| &self.entries[i])
            .ok_or_else(|| RegistryError::NotFound {
                key: key.to_string(),
            })
    }

    /// 键是否已注册
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// 枚举全部因子（注册顺序）
    pub fn list(&self) -> &[EmissionFactor] {
        &self.entries
    }

    /// 因子条目数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // 保序插入: 已有键原位覆盖,新键追加到尾部
    fn insert(&mut self, factor: EmissionFactor) {
        match self.index.get(&factor.key) {
            Some(&i) => {
                self.entries[i] = factor;
            }
            None => {
                self.index.insert(factor.key.clone(), self.entries.len());
                self.entries.push(factor);
            }
        }
    }
}
