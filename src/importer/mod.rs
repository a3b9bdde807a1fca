// ==========================================
// 企业碳排放计算器 - 导入层
// ==========================================
// 职责: 外部活动数据导入,生成内部数据行
// 支持: Excel (.xlsx/.xls), CSV
// 红线: 表头/类型任一校验失败则整批拒绝,不做部分导入
// ==========================================

// 模块声明
pub mod activity_importer;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod schema;

// 重导出核心类型
pub use activity_importer::ActivityImporter;
pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper;
pub use file_parser::{CsvParser, ExcelParser, ParsedTable, UniversalFileParser};
