// ==========================================
// 企业碳排放计算器 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    // ===== 核算错误 =====
    // 红线: 类别文本无法识别必须报错,不得静默落入范围二
    #[error("无法识别的排放类别 (row={row_number}): {category}")]
    InvalidCategory { row_number: usize, category: String },

    // ===== 报告组装错误 =====
    #[error("总排放量为 0, 无法计算范围占比")]
    DivideByZero,
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;
