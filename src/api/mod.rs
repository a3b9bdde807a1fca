// ==========================================
// 企业碳排放计算器 - API 层
// ==========================================
// 职责: 对外业务接口,持有共享因子库,串联导入/匹配/核算/组装
// 红线: 因子库读多写少,读写锁保护;错误全部转为用户可读消息
// ==========================================

pub mod error;
pub mod factor_api;
pub mod inventory_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use factor_api::FactorApi;
pub use inventory_api::InventoryApi;
