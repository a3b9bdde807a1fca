// ==========================================
// 企业碳排放计算器 - 活动数据导入器
// ==========================================
// 职责: 整合导入流程,从文件到活动数据行
// 流程: 解析 → 表头校验 → 字段映射 → 批次元信息
// 红线: 全程 all-or-nothing,任一行失败则整批失败且无部分结果
// ==========================================

use crate::domain::activity::{ActivityRow, UploadBatch};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::FieldMapper;
use crate::importer::file_parser::UniversalFileParser;
use chrono::Utc;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, instrument};
use uuid::Uuid;

// ==========================================
// ActivityImporter - 活动数据导入器
// ==========================================
pub struct ActivityImporter {
    file_parser: UniversalFileParser,
    field_mapper: FieldMapper,
}

impl ActivityImporter {
    /// 创建新的活动数据导入器
    pub fn new() -> Self {
        Self {
            file_parser: UniversalFileParser,
            field_mapper: FieldMapper,
        }
    }

    /// 从文件导入活动数据
    ///
    /// # 参数
    /// - file_path: 活动数据文件路径（.xlsx/.xls/.csv）
    ///
    /// # 返回
    /// - Ok((UploadBatch, Vec<ActivityRow>)): 批次元信息 + 活动数据行
    /// - Err(ImportError): 文件/表头/类型任一环节失败,无部分结果
    #[instrument(skip(self, file_path), fields(batch_id))]
    pub fn import_file<P: AsRef<Path>>(
        &self,
        file_path: P,
    ) -> ImportResult<(UploadBatch, Vec<ActivityRow>)> {
        let start_time = Instant::now();
        let batch_id = Uuid::new_v4().to_string();

        let path = file_path.as_ref();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        info!(batch_id = %batch_id, file = %file_name, "开始导入活动数据");

        // === 步骤 1: 解析文件 ===
        debug!("步骤 1: 解析文件");
        let table = self.file_parser.parse(path)?;

        // === 步骤 2: 表头校验 ===
        debug!("步骤 2: 表头校验");
        self.field_mapper.validate_schema(&table.headers)?;
        if table.rows.is_empty() {
            return Err(ImportError::EmptyTable);
        }

        // === 步骤 3: 字段映射 ===
        // 文件行号 = 数据行下标 + 2（表头占第 1 行）
        debug!("步骤 3: 字段映射");
        let mut rows = Vec::with_capacity(table.rows.len());
        for (idx, row) in table.rows.iter().enumerate() {
            rows.push(self.field_mapper.map_to_activity_row(row, idx + 2)?);
        }

        // === 步骤 4: 批次元信息 ===
        let batch = UploadBatch {
            batch_id: batch_id.clone(),
            file_name,
            total_rows: rows.len(),
            imported_at: Utc::now(),
            elapsed_ms: start_time.elapsed().as_millis() as u64,
        };

        info!(
            batch_id = %batch_id,
            total_rows = batch.total_rows,
            elapsed_ms = batch.elapsed_ms,
            "活动数据导入完成"
        );

        Ok((batch, rows))
    }
}

impl Default for ActivityImporter {
    fn default() -> Self {
        Self::new()
    }
}
