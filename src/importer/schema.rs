// ==========================================
// 企业碳排放计算器 - 表格列名约定
// ==========================================
// 职责: 上传/模板/导出共用的列名常量,单处定义
// 红线: 模板列与上传校验列必须引用同一组常量（保证往返一致）
// ==========================================

/// 上传表格的输入列（模板使用同一组列名）
pub mod columns {
    pub const CATEGORY: &str = "类别";
    pub const SUBCATEGORY: &str = "子类别";
    pub const SOURCE: &str = "排放源";
    pub const FACILITY: &str = "设施/过程";
    pub const QUANTITY: &str = "活动数据";
    pub const UNIT: &str = "计量单位";

    /// 必需列全集（缺任一列则整批拒绝）
    pub const REQUIRED: [&str; 6] = [CATEGORY, SUBCATEGORY, SOURCE, FACILITY, QUANTITY, UNIT];
}

/// 导出明细表在输入列之外追加的列
pub mod output {
    pub const SUGGESTED_KEY: &str = "建议排放源类型";
    pub const FACTOR: &str = "排放因子";
    pub const FACTOR_UNIT: &str = "因子单位";
    pub const GAS_TYPE: &str = "温室气体类型";
    pub const MATCH_STATUS: &str = "匹配状态";
    pub const EMISSIONS_KG: &str = "排放量(kgCO2e)";
    pub const EMISSIONS_T: &str = "排放量(tCO2e)";
    pub const SCOPE: &str = "范围";
}

/// 导出汇总表的列
pub mod summary_output {
    pub const SCOPE: &str = "范围";
    pub const EMISSIONS_T: &str = "排放量(tCO2e)";
    pub const SHARE: &str = "占比(%)";
}
