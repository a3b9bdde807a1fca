// ==========================================
// 企业碳排放计算器 - 应用层
// ==========================================
// 职责: 组合根,装配因子库与 API 实例
// ==========================================

pub mod state;

// 重导出
pub use state::{get_default_library_path, AppState};
