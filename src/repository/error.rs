// ==========================================
// 企业碳排放计算器 - 因子库层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 因子库层错误类型
#[derive(Error, Debug)]
pub enum RegistryError {
    // ===== 注册校验错误 =====
    #[error("无效排放因子 (field={field}): {message}")]
    InvalidFactor { field: String, message: String },

    // ===== 查询错误 =====
    #[error("排放因子未找到: key={key}")]
    NotFound { key: String },
}

/// Result 类型别名
pub type RegistryResult<T> = Result<T, RegistryError>;
