// ==========================================
// 企业碳排放计算器 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和 API 实例
// 装配: 内置因子 → 因子库文件合并 → Arc<RwLock> 共享 → API 实例
// ==========================================

use std::sync::{Arc, RwLock};

use crate::api::error::ApiResult;
use crate::api::{FactorApi, InventoryApi};
use crate::config::factor_library::FactorLibraryLoader;
use crate::repository::factor_registry::FactorRegistry;

/// 应用状态
///
/// 持有共享因子库与所有 API 实例,会话内唯一
pub struct AppState {
    /// 因子库文件路径
    pub library_path: String,

    /// 共享因子库（读多写少,读写锁保护）
    pub registry: Arc<RwLock<FactorRegistry>>,

    /// 因子库 API
    pub factor_api: Arc<FactorApi>,

    /// 核算流程 API
    pub inventory_api: Arc<InventoryApi>,
}

impl AppState {
    /// 创建新的 AppState 实例
    ///
    /// # 参数
    /// - library_path: 因子库 JSON 文件路径（缺失时使用内置默认因子）
    ///
    /// # 返回
    /// - Ok(AppState): 内置因子已预置,文件条目已合并（后注册者生效）
    /// - Err(ApiError): 因子库文件损坏或条目校验失败
    pub fn new(library_path: String) -> ApiResult<Self> {
        tracing::info!(path = %library_path, "初始化 AppState");

        // 1. 内置因子 + 文件合并
        let mut registry = FactorRegistry::with_defaults();
        let loader = FactorLibraryLoader;
        let entries = loader.load(&library_path)?;
        loader.merge_into(&entries, &mut registry)?;
        tracing::info!(factors = registry.len(), "因子库就绪");

        // 2. 共享因子库 + API 实例
        let registry = Arc::new(RwLock::new(registry));
        let factor_api = Arc::new(FactorApi::new(registry.clone()));
        let inventory_api = Arc::new(InventoryApi::new(registry.clone()));

        Ok(Self {
            library_path,
            registry,
            factor_api,
            inventory_api,
        })
    }
}

/// 获取默认因子库文件路径
///
/// # 返回
/// - 环境变量 CARBON_INVENTORY_FACTOR_LIBRARY 指定的路径（非空时优先）
/// - 否则: 用户配置目录/carbon-inventory/factor_library.json
/// - 拿不到配置目录时回退为 ./factor_library.json
pub fn get_default_library_path() -> String {
    use std::path::PathBuf;

    if let Ok(path) = std::env::var("CARBON_INVENTORY_FACTOR_LIBRARY") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    let mut path = PathBuf::from("./factor_library.json");
    if let Some(config_dir) = dirs::config_dir() {
        let dir = config_dir.join("carbon-inventory");
        std::fs::create_dir_all(&dir).ok();
        path = dir.join("factor_library.json");
    }

    path.to_string_lossy().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_app_state_with_missing_library_uses_defaults() {
        let state = AppState::new("不存在的因子库.json".to_string()).unwrap();
        assert_eq!(state.registry.read().unwrap().len(), 15);
    }

    #[test]
    fn test_app_state_merges_library_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"key":"外购电力-华南区域","factor":0.8042,"unit":"kgCO2/kWh","gas_type":"CO2"}}]"#
        )
        .unwrap();

        let state = AppState::new(file.path().to_string_lossy().to_string()).unwrap();
        let registry = state.registry.read().unwrap();
        assert_eq!(registry.len(), 16);
        assert_eq!(registry.lookup("外购电力-华南区域").unwrap().factor, 0.8042);
    }

    #[test]
    fn test_app_state_malformed_library_fails() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "损坏的内容").unwrap();

        let result = AppState::new(file.path().to_string_lossy().to_string());
        assert!(result.is_err());
    }

    #[test]
    fn test_default_library_path_not_empty() {
        let path = get_default_library_path();
        assert!(!path.is_empty());
        assert!(path.ends_with(".json"));
    }
}
