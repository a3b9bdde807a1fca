// ==========================================
// 企业碳排放计算器 - 导出层
// ==========================================
// 职责: 模板生成与核算报告落盘（纯边界,仅做格式化搬运）
// 红线: 导出只搬运 ReportBundle 中的数值,不做任何重新计算
// ==========================================

pub mod error;
pub mod report_writer;
pub mod template;

// 重导出核心类型
pub use error::{ExportError, ExportResult};
pub use report_writer::ReportWriter;
pub use template::{template_rows, TemplateGenerator, DEFAULT_TEMPLATE_FILE_NAME};
