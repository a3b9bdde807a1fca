// ==========================================
// 企业碳排放计算器 - 因子库层
// ==========================================
// 红线: 因子库不含分类逻辑,不含核算逻辑
// ==========================================
// 职责: 排放因子的会话内存储、注册校验与精确查询
// ==========================================

pub mod error;
pub mod factor_registry;

// 重导出核心类型
pub use error::{RegistryError, RegistryResult};
pub use factor_registry::FactorRegistry;
