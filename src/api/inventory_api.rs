// ==========================================
// 企业碳排放计算器 - 核算流程 API
// ==========================================
// 职责: 串联导入→匹配→人工修正→核算→组装→导出的完整流程
// 红线: 本层不缓存任何派生数据;因子库变更后重新调用即重新核算
// 红线: 人工修正是单次原子编辑,失败不留部分更新
// ==========================================

use std::path::Path;
use std::sync::{Arc, RwLock};

use tracing::{info, instrument};

use crate::api::error::{ApiError, ApiResult};
use crate::domain::activity::{ActivityRow, MatchStats, MatchedRow, UploadBatch};
use crate::domain::report::{ComputedRow, EmissionSummary, ReportBundle};
use crate::engine::aggregator::AggregationEngine;
use crate::engine::classifier::ClassifierEngine;
use crate::engine::report::ReportAssembler;
use crate::exporter::report_writer::ReportWriter;
use crate::importer::activity_importer::ActivityImporter;
use crate::perf::PerfGuard;
use crate::repository::factor_registry::FactorRegistry;

// ==========================================
// InventoryApi - 核算流程 API
// ==========================================
pub struct InventoryApi {
    registry: Arc<RwLock<FactorRegistry>>,
    importer: ActivityImporter,
    classifier: ClassifierEngine,
    aggregator: AggregationEngine,
    assembler: ReportAssembler,
    writer: ReportWriter,
}

impl InventoryApi {
    /// 创建新的 InventoryApi 实例
    ///
    /// # 参数
    /// - registry: 共享因子库（与 FactorApi 同一实例）
    pub fn new(registry: Arc<RwLock<FactorRegistry>>) -> Self {
        Self {
            registry,
            importer: ActivityImporter::new(),
            classifier: ClassifierEngine::new(),
            aggregator: AggregationEngine::new(),
            assembler: ReportAssembler::new(),
            writer: ReportWriter,
        }
    }

    // ==========================================
    // 导入 + 匹配
    // ==========================================

    /// 导入活动数据文件并批量匹配因子
    ///
    /// # 返回
    /// - Ok((批次元信息, 匹配结果行, 匹配统计))
    /// - Err(ImportFailure): 文件/表头/类型任一环节失败,无部分结果
    #[instrument(skip(self, file_path))]
    pub fn import_and_classify<P: AsRef<Path>>(
        &self,
        file_path: P,
    ) -> ApiResult<(UploadBatch, Vec<MatchedRow>, MatchStats)> {
        let _perf = PerfGuard::new("import_and_classify");

        let (batch, rows) = self.importer.import_file(file_path)?;
        let matched = self.classify(&rows)?;
        let stats = MatchStats::from_rows(&matched);
        Ok((batch, matched, stats))
    }

    /// 批量匹配因子（对已持有的活动数据行重新匹配）
    pub fn classify(&self, rows: &[ActivityRow]) -> ApiResult<Vec<MatchedRow>> {
        let registry = self
            .registry
            .read()
            .map_err(|e| ApiError::LockFailure(e.to_string()))?;
        Ok(self.classifier.classify_batch(rows, &registry))
    }

    // ==========================================
    // 人工修正
    // ==========================================

    /// 人工修正某行的因子键
    ///
    /// # 参数
    /// - rows: 调用方持有的匹配结果集合
    /// - row_index: 待修正行在集合中的下标
    /// - new_key: 新选择的因子键（必须已在因子库注册）
    ///
    /// # 返回
    /// - Ok(()): 因子/单位/气体已随键同步重取,行状态 MATCHED
    /// - Err(InvalidSelection): 键不在因子库,行保持原状
    /// - Err(InvalidInput): 下标越界
    #[instrument(skip(self, rows), fields(row_index = row_index, key = %new_key))]
    pub fn correct_row(
        &self,
        rows: &mut [MatchedRow],
        row_index: usize,
        new_key: &str,
    ) -> ApiResult<()> {
        let row_count = rows.len();
        let row = rows.get_mut(row_index).ok_or_else(|| {
            ApiError::InvalidInput(format!("行下标越界: {} (共 {} 行)", row_index, row_count))
        })?;

        let registry = self
            .registry
            .read()
            .map_err(|e| ApiError::LockFailure(e.to_string()))?;
        self.classifier.apply_correction(row, new_key, &registry)?;
        Ok(())
    }

    // ==========================================
    // 核算 + 组装 + 导出
    // ==========================================

    /// 核算排放量并生成汇总
    pub fn compute(&self, rows: &[MatchedRow]) -> ApiResult<(Vec<ComputedRow>, EmissionSummary)> {
        let _perf = PerfGuard::new("compute");
        Ok(self.aggregator.compute(rows)?)
    }

    /// 组装报告包
    pub fn assemble(
        &self,
        computed: &[ComputedRow],
        summary: &EmissionSummary,
    ) -> ApiResult<ReportBundle> {
        Ok(self.assembler.assemble(computed, summary)?)
    }

    /// 完整流程: 导入 → 匹配 → 核算 → 组装 → 导出明细/汇总 CSV
    ///
    /// # 返回
    /// - Ok((报告包, 匹配统计)): 文件已写入 output_dir
    #[instrument(skip(self, file_path, output_dir))]
    pub fn run_pipeline<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        file_path: P,
        output_dir: Q,
    ) -> ApiResult<(ReportBundle, MatchStats)> {
        let _perf = PerfGuard::new("run_pipeline");

        let (batch, matched, stats) = self.import_and_classify(file_path)?;
        let (computed, summary) = self.compute(&matched)?;
        let bundle = self.assemble(&computed, &summary)?;
        self.writer.write_report(&bundle, output_dir)?;

        info!(
            batch_id = %batch.batch_id,
            rows = stats.total,
            matched = stats.matched,
            total_tonnes = summary.total_tonnes,
            "核算流程完成"
        );
        Ok((bundle, stats))
    }
}
