// ==========================================
// 企业碳排放计算器 - 核算报告导出器
// ==========================================
// 职责: 将 ReportBundle 写出为明细/汇总两个 CSV 文件
// 红线: 数值原样搬运自 ReportBundle,占比仅做两位小数格式化
// ==========================================

use std::path::{Path, PathBuf};

use chrono::Local;
use csv::WriterBuilder;
use tracing::info;

use crate::domain::report::ReportBundle;
use crate::exporter::error::ExportResult;
use crate::importer::schema::{columns, output, summary_output};

// ==========================================
// ReportWriter - 核算报告导出器
// ==========================================
pub struct ReportWriter;

impl ReportWriter {
    /// 写出核算报告（明细 + 汇总）
    ///
    /// # 参数
    /// - bundle: 报告包（数值已由组装引擎定稿）
    /// - output_dir: 输出目录（须已存在）
    ///
    /// # 返回
    /// - Ok((明细文件路径, 汇总文件路径)): 文件名携带当日日期（YYYYMMDD）
    /// - Err(ExportError): IO/CSV 写出失败
    pub fn write_report<P: AsRef<Path>>(
        &self,
        bundle: &ReportBundle,
        output_dir: P,
    ) -> ExportResult<(PathBuf, PathBuf)> {
        let dir = output_dir.as_ref();
        let date = Local::now().format("%Y%m%d");
        let detail_path = dir.join(format!("碳排放核算明细_{}.csv", date));
        let summary_path = dir.join(format!("碳排放汇总_{}.csv", date));

        self.write_detail(bundle, &detail_path)?;
        self.write_summary(bundle, &summary_path)?;

        info!(
            detail = %detail_path.display(),
            summary = %summary_path.display(),
            rows = bundle.detail_rows.len(),
            "核算报告已导出"
        );
        Ok((detail_path, summary_path))
    }

    // 明细表: 输入六列 + 匹配五列 + 核算三列
    fn write_detail(&self, bundle: &ReportBundle, path: &Path) -> ExportResult<()> {
        let mut writer = WriterBuilder::new().from_path(path)?;

        writer.write_record([
            columns::CATEGORY,
            columns::SUBCATEGORY,
            columns::SOURCE,
            columns::FACILITY,
            columns::QUANTITY,
            columns::UNIT,
            output::SUGGESTED_KEY,
            output::FACTOR,
            output::FACTOR_UNIT,
            output::GAS_TYPE,
            output::MATCH_STATUS,
            output::EMISSIONS_KG,
            output::EMISSIONS_T,
            output::SCOPE,
        ])?;

        for row in &bundle.detail_rows {
            let quantity = row.activity_quantity.to_string();
            let factor = row.factor.to_string();
            let kg = row.emissions_kg.to_string();
            let tonnes = row.emissions_tonnes.to_string();
            writer.write_record([
                row.category.as_str(),
                row.subcategory.as_str(),
                row.source.as_str(),
                row.facility_or_process.as_str(),
                quantity.as_str(),
                row.unit.as_str(),
                row.suggested_key.as_str(),
                factor.as_str(),
                row.factor_unit.as_str(),
                row.gas_type.as_str(),
                row.match_status.as_str(),
                kg.as_str(),
                tonnes.as_str(),
                row.scope.as_str(),
            ])?;
        }
        writer.flush()?;
        Ok(())
    }

    // 汇总表: 范围一/范围二携带占比,总量行占比 100.00
    fn write_summary(&self, bundle: &ReportBundle, path: &Path) -> ExportResult<()> {
        let mut writer = WriterBuilder::new().from_path(path)?;

        writer.write_record([
            summary_output::SCOPE,
            summary_output::EMISSIONS_T,
            summary_output::SHARE,
        ])?;

        for row in &bundle.summary_rows {
            let share = bundle
                .scope_shares
                .iter()
                .find(|s| s.scope.label_zh() == row.label)
                .map(|s| s.percent)
                .unwrap_or(100.0); // 总量行
            let tonnes = row.tonnes.to_string();
            let share = format!("{:.2}", share);
            writer.write_record([row.label.as_str(), tonnes.as_str(), share.as_str()])?;
        }
        writer.flush()?;
        Ok(())
    }
}
