// ==========================================
// 企业碳排放计算器 - 数据模板生成器
// ==========================================
// 职责: 生成预填六行示例数据的上传模板
// 红线: 模板列名与示例行必须能经导入→匹配全量命中内置因子库（往返一致）
// ==========================================

use std::path::Path;

use csv::WriterBuilder;
use tracing::info;

use crate::exporter::error::ExportResult;
use crate::importer::schema::columns;

/// 默认模板文件名
pub const DEFAULT_TEMPLATE_FILE_NAME: &str = "碳排放数据模板.csv";

// 六行示例,覆盖 1.1-2.2 全部子类别,排放源均在内置因子库中
const EXAMPLE_ROWS: [[&str; 6]; 6] = [
    ["范围一：直接温室气体排放", "1.1 固定燃烧", "天然气", "燃气锅炉", "1239138", "m³"],
    ["范围一：直接温室气体排放", "1.2 移动燃烧", "汽油", "公务车", "11010", "kg"],
    ["范围一：直接温室气体排放", "1.3 工艺排放", "丙烷", "焊接", "792", "kg"],
    ["范围一：直接温室气体排放", "1.4 无组织排放", "R410A", "空调", "3.15", "kg"],
    ["范围二：间接温室气体排放", "2.1 外购电力", "外购市政电", "用电", "1500000", "kWh"],
    ["范围二：间接温室气体排放", "2.2 外购热力", "蒸汽", "供暖设备", "500", "GJ"],
];

/// 模板示例行（表头之外的六行数据）
pub fn template_rows() -> Vec<[&'static str; 6]> {
    EXAMPLE_ROWS.to_vec()
}

// ==========================================
// TemplateGenerator - 模板生成器
// ==========================================
pub struct TemplateGenerator;

impl TemplateGenerator {
    /// 写出上传模板 CSV
    ///
    /// # 参数
    /// - output_path: 输出文件路径
    ///
    /// # 返回
    /// - Ok(()): 写出完成（表头 + 六行示例）
    /// - Err(ExportError): IO/CSV 写出失败
    pub fn write_template<P: AsRef<Path>>(&self, output_path: P) -> ExportResult<()> {
        let path = output_path.as_ref();
        let mut writer = WriterBuilder::new().from_path(path)?;

        writer.write_record(columns::REQUIRED)?;
        for row in EXAMPLE_ROWS {
            writer.write_record(row)?;
        }
        writer.flush()?;

        info!(path = %path.display(), rows = EXAMPLE_ROWS.len(), "数据模板已生成");
        Ok(())
    }
}
