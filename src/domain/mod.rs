// ==========================================
// 企业碳排放计算器 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型与数据不变量
// 红线: 不含文件访问逻辑,不含引擎逻辑
// ==========================================

pub mod activity;
pub mod factor;
pub mod report;
pub mod types;

// 重导出核心类型
pub use activity::{ActivityRow, MatchStats, MatchedRow, UploadBatch};
pub use factor::EmissionFactor;
pub use report::{
    ComputedRow, DetailRow, EmissionSummary, ReportBundle, ScopeShare, SummaryRow,
    RECONCILE_REL_TOL,
};
pub use types::{GasType, MatchStatus, Scope};
