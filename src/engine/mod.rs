// ==========================================
// 企业碳排放计算器 - 引擎层
// ==========================================
// 职责: 实现分类匹配、排放核算与报告组装规则
// 红线: Engine 不做文件 IO, 所有匹配决策必须输出 reason
// ==========================================

pub mod aggregator;
pub mod classifier;
pub mod error;
pub mod report;

// 重导出核心引擎
pub use aggregator::AggregationEngine;
pub use classifier::{ClassifierEngine, NATIONAL_GRID_KEY, PENDING_UNIT, UNRECOGNIZED_KEY};
pub use error::{EngineError, EngineResult};
pub use report::ReportAssembler;
