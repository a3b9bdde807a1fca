// ==========================================
// 企业碳排放计算器 - 因子库配置文件
// ==========================================
// 职责: 从 JSON 文件加载用户自定义因子,合并到因子库
// 约定: 文件缺失视为无自定义因子;文件损坏是错误
// 红线: 合并走 registry.add 的同一校验口径,后注册者生效
// ==========================================

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::types::GasType;
use crate::repository::factor_registry::FactorRegistry;

/// 配置层错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("因子库文件读取失败: {0}")]
    FileReadError(String),

    #[error("因子库文件格式错误: {0}")]
    ParseError(String),

    #[error("因子库条目无效 (key={key}): {message}")]
    InvalidEntry { key: String, message: String },
}

/// Result 类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;

// ==========================================
// FactorLibraryEntry - 因子库文件条目
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorLibraryEntry {
    pub key: String,       // 排放源键
    pub factor: f64,       // 因子值（> 0）
    pub unit: String,      // 因子单位
    pub gas_type: GasType, // 温室气体类型
}

// ==========================================
// FactorLibraryLoader - 因子库配置加载器
// ==========================================
pub struct FactorLibraryLoader;

impl FactorLibraryLoader {
    /// 从 JSON 文件加载因子条目
    ///
    /// # 返回
    /// - Ok(Vec<FactorLibraryEntry>): 文件不存在返回空集（内置默认生效）
    /// - Err(ConfigError): 文件可读但内容损坏
    pub fn load<P: AsRef<Path>>(&self, path: P) -> ConfigResult<Vec<FactorLibraryEntry>> {
        let path = path.as_ref();
        if !path.exists() {
            info!(path = %path.display(), "因子库文件不存在,使用内置默认因子");
            return Ok(Vec::new());
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        let entries: Vec<FactorLibraryEntry> =
            serde_json::from_str(&raw).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        info!(path = %path.display(), count = entries.len(), "因子库文件加载完成");
        Ok(entries)
    }

    /// 将文件条目合并到因子库（同键覆盖,后注册者生效）
    ///
    /// # 返回
    /// - Ok(合并条数)
    /// - Err(InvalidEntry): 任一条目未通过注册校验,错误携带该条目的键
    pub fn merge_into(
        &self,
        entries: &[FactorLibraryEntry],
        registry: &mut FactorRegistry,
    ) -> ConfigResult<usize> {
        for entry in entries {
            registry
                .add(&entry.key, entry.factor, &entry.unit, entry.gas_type)
                .map_err(|e| ConfigError::InvalidEntry {
                    key: entry.key.clone(),
                    message: e.to_string(),
                })?;
        }
        if !entries.is_empty() {
            warn!(count = entries.len(), "自定义因子已覆盖同键内置因子");
        }
        Ok(entries.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_missing_file_yields_empty() {
        let entries = FactorLibraryLoader.load("不存在的因子库.json").unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_load_malformed_file_fails() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{{ 不是合法的 JSON").unwrap();

        let err = FactorLibraryLoader.load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_load_and_merge_overrides_built_in() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"key":"固定燃烧-天然气","factor":2.2,"unit":"kgCO2/m3","gas_type":"CO2"}},
                {{"key":"固定燃烧-沼气","factor":1.2,"unit":"kgCO2/m3","gas_type":"CH4"}}]"#
        )
        .unwrap();

        let entries = FactorLibraryLoader.load(file.path()).unwrap();
        assert_eq!(entries.len(), 2);

        let mut registry = FactorRegistry::with_defaults();
        let merged = FactorLibraryLoader.merge_into(&entries, &mut registry).unwrap();
        assert_eq!(merged, 2);

        // 同键覆盖内置值,新键追加
        assert_eq!(registry.lookup("固定燃烧-天然气").unwrap().factor, 2.2);
        assert_eq!(registry.lookup("固定燃烧-沼气").unwrap().gas_type, GasType::Ch4);
        assert_eq!(registry.len(), 16);
    }

    #[test]
    fn test_merge_invalid_entry_fails_with_key() {
        let entries = vec![FactorLibraryEntry {
            key: "固定燃烧-测试".to_string(),
            factor: 0.0,
            unit: "kgCO2/kg".to_string(),
            gas_type: GasType::Co2,
        }];

        let mut registry = FactorRegistry::new();
        let err = FactorLibraryLoader.merge_into(&entries, &mut registry).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEntry { ref key, .. } if key == "固定燃烧-测试"));
    }
}
