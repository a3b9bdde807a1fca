// ==========================================
// 企业碳排放计算器 - 配置层
// ==========================================
// 职责: 因子库配置文件的加载与合并
// ==========================================

pub mod factor_library;

// 重导出核心类型
pub use factor_library::{ConfigError, ConfigResult, FactorLibraryEntry, FactorLibraryLoader};
