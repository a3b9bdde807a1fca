// ==========================================
// 企业碳排放计算器 - 因子库 API
// ==========================================
// 职责: 因子注册与枚举（对应交互端的自定义因子表单/因子列表）
// 红线: 注册校验在因子库层执行一次,本层只做气体类型解析与锁管理
// ==========================================

use std::sync::{Arc, RwLock};

use tracing::{info, instrument};

use crate::api::error::{ApiError, ApiResult};
use crate::domain::factor::EmissionFactor;
use crate::domain::types::GasType;
use crate::repository::factor_registry::FactorRegistry;

// ==========================================
// FactorApi - 因子库 API
// ==========================================
pub struct FactorApi {
    registry: Arc<RwLock<FactorRegistry>>,
}

impl FactorApi {
    /// 创建新的 FactorApi 实例
    ///
    /// # 参数
    /// - registry: 共享因子库（与 InventoryApi 同一实例）
    pub fn new(registry: Arc<RwLock<FactorRegistry>>) -> Self {
        Self { registry }
    }

    /// 注册自定义排放因子
    ///
    /// # 参数
    /// - key: 排放源键（非空）
    /// - factor: 因子值（> 0）
    /// - unit: 因子单位（非空）
    /// - gas_type: 气体类型文本（CO2/CH4/N2O/HFCs）
    ///
    /// # 返回
    /// - Ok(()): 注册成功,对后续所有查询立即可见
    /// - Err(InvalidInput): 气体类型无法解析或因子校验失败
    #[instrument(skip(self), fields(key = %key))]
    pub fn add_factor(&self, key: &str, factor: f64, unit: &str, gas_type: &str) -> ApiResult<()> {
        let gas = GasType::from_str(gas_type).ok_or_else(|| {
            ApiError::InvalidInput(format!("无法识别的气体类型: {}（支持 CO2/CH4/N2O/HFCs）", gas_type))
        })?;

        let mut registry = self
            .registry
            .write()
            .map_err(|e| ApiError::LockFailure(e.to_string()))?;
        registry.add(key, factor, unit, gas)?;

        info!(key = %key, factor = factor, gas = %gas, "自定义因子注册成功");
        Ok(())
    }

    /// 枚举全部因子（注册顺序）
    pub fn list_factors(&self) -> ApiResult<Vec<EmissionFactor>> {
        let registry = self
            .registry
            .read()
            .map_err(|e| ApiError::LockFailure(e.to_string()))?;
        Ok(registry.list().to_vec())
    }
}
