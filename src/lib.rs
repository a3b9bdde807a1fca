// ==========================================
// 企业碳排放计算器 - 核心库
// ==========================================
// 依据: GHG Protocol 企业核算与报告标准 / IPCC 2006 指南
// 系统定位: 排放因子匹配与核算引擎（决策留给人工修正）
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 因子库层 - 排放因子存储与查询
pub mod repository;

// 引擎层 - 匹配/核算/组装规则
pub mod engine;

// 导入层 - 活动数据文件
pub mod importer;

// 导出层 - 模板与报告文件
pub mod exporter;

// 配置层 - 因子库文件
pub mod config;

// 日志系统
pub mod logging;

// 性能统计
pub mod perf;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// 应用层 - 组合根
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{GasType, MatchStatus, Scope};

// 领域实体
pub use domain::{
    ActivityRow, ComputedRow, EmissionFactor, EmissionSummary, MatchStats, MatchedRow,
    ReportBundle, UploadBatch,
};

// 因子库
pub use repository::FactorRegistry;

// 引擎
pub use engine::{AggregationEngine, ClassifierEngine, ReportAssembler};

// API
pub use api::{FactorApi, InventoryApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "企业碳排放计算器";
