// ==========================================
// 企业碳排放计算器 - API 层错误类型
// ==========================================
// 职责: 将下层技术错误转换为用户可读的业务错误
// 红线: 每条错误信息必须包含显式原因（可解释性）
// ==========================================

use crate::config::factor_library::ConfigError;
use crate::engine::error::EngineError;
use crate::exporter::error::ExportError;
use crate::importer::error::ImportError;
use crate::repository::error::RegistryError;
use thiserror::Error;

/// API 层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ===== 输入校验错误 =====
    #[error("无效输入: {0}")]
    InvalidInput(String),

    /// 人工修正时所选键不在因子库中
    #[error("无效的因子选择: 键[{key}]不在因子库中")]
    InvalidSelection { key: String },

    // ===== 下层错误的业务化包装 =====
    #[error("因子库操作失败: {0}")]
    RegistryFailure(String),

    #[error("活动数据导入失败: {0}")]
    ImportFailure(String),

    #[error("排放核算失败: {0}")]
    ComputeFailure(String),

    #[error("报告导出失败: {0}")]
    ExportFailure(String),

    #[error("因子库配置加载失败: {0}")]
    ConfigFailure(String),

    // ===== 并发基础设施错误 =====
    #[error("因子库锁获取失败: {0}")]
    LockFailure(String),
}

// ==========================================
// 下层错误转换矩阵
// 目的: 调用方只面对 ApiError 一种错误类型
// ==========================================

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::InvalidFactor { .. } => ApiError::InvalidInput(err.to_string()),
            RegistryError::NotFound { key } => ApiError::InvalidSelection { key },
        }
    }
}

impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        ApiError::ImportFailure(err.to_string())
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        ApiError::ComputeFailure(err.to_string())
    }
}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        ApiError::ExportFailure(err.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::ConfigFailure(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
