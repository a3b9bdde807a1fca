// ==========================================
// 企业碳排放计算器 - 字段映射器实现
// ==========================================
// 职责: 表头校验 + 行映射 → ActivityRow + 类型转换
// 红线: 任一行类型转换失败则整批失败,错误携带文件行号
// ==========================================

use crate::domain::activity::ActivityRow;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::schema::columns;
use std::collections::HashMap;

pub struct FieldMapper;

impl FieldMapper {
    /// 校验表头是否包含全部必需列
    ///
    /// # 返回
    /// - Ok(()): 表头完整
    /// - Err(SchemaError): 一次性列出所有缺失列
    pub fn validate_schema(&self, headers: &[String]) -> ImportResult<()> {
        let missing: Vec<String> = columns::REQUIRED
            .iter()
            .filter(|required| !headers.iter().any(|h| h == *required))
            .map(|c| c.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(ImportError::SchemaError { missing });
        }
        Ok(())
    }

    /// 单行映射为活动数据行
    ///
    /// # 参数
    /// - row: 列名 → 单元格文本
    /// - row_number: 原始文件行号（1 起,含表头）
    pub fn map_to_activity_row(
        &self,
        row: &HashMap<String, String>,
        row_number: usize,
    ) -> ImportResult<ActivityRow> {
        Ok(ActivityRow {
            category: self.get_string(row, columns::CATEGORY),
            subcategory: self.get_string(row, columns::SUBCATEGORY),
            source: self.get_string(row, columns::SOURCE),
            facility_or_process: self.get_string(row, columns::FACILITY),
            activity_quantity: self.parse_f64(row, columns::QUANTITY, row_number)?,
            unit: self.get_string(row, columns::UNIT),
            row_number,
        })
    }

    /// 提取字符串字段（缺失/空白按空字符串处理,后续由匹配状态兜底暴露）
    fn get_string(&self, row: &HashMap<String, String>, key: &str) -> String {
        row.get(key).map(|v| v.trim().to_string()).unwrap_or_default()
    }

    /// 解析必填浮点数（容忍千分位逗号）
    fn parse_f64(
        &self,
        row: &HashMap<String, String>,
        key: &str,
        row_number: usize,
    ) -> ImportResult<f64> {
        let raw = self.get_string(row, key);
        if raw.is_empty() {
            return Err(ImportError::TypeConversionError {
                row: row_number,
                field: key.to_string(),
                message: "单元格为空".to_string(),
            });
        }

        let cleaned = raw.replace(',', "");
        cleaned
            .parse::<f64>()
            .map_err(|_| ImportError::TypeConversionError {
                row: row_number,
                field: key.to_string(),
                message: format!("无法解析为数值: {}", raw),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_row() -> HashMap<String, String> {
        let mut row = HashMap::new();
        row.insert("类别".to_string(), "范围一：直接温室气体排放".to_string());
        row.insert("子类别".to_string(), "1.1 固定燃烧".to_string());
        row.insert("排放源".to_string(), "天然气".to_string());
        row.insert("设施/过程".to_string(), "燃气锅炉".to_string());
        row.insert("活动数据".to_string(), "1239138".to_string());
        row.insert("计量单位".to_string(), "m³".to_string());
        row
    }

    fn full_headers() -> Vec<String> {
        columns::REQUIRED.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_validate_schema_complete() {
        let mapper = FieldMapper;
        assert!(mapper.validate_schema(&full_headers()).is_ok());
    }

    #[test]
    fn test_validate_schema_reports_all_missing_columns() {
        let mapper = FieldMapper;
        let headers = vec!["类别".to_string(), "排放源".to_string()];

        let err = mapper.validate_schema(&headers).unwrap_err();
        match err {
            ImportError::SchemaError { missing } => {
                assert_eq!(missing, vec!["子类别", "设施/过程", "活动数据", "计量单位"]);
            }
            other => panic!("期望 SchemaError, 实际 {:?}", other),
        }
    }

    #[test]
    fn test_map_valid_row() {
        let mapper = FieldMapper;
        let activity = mapper.map_to_activity_row(&full_row(), 2).unwrap();

        assert_eq!(activity.category, "范围一：直接温室气体排放");
        assert_eq!(activity.subcategory, "1.1 固定燃烧");
        assert_eq!(activity.source, "天然气");
        assert_eq!(activity.activity_quantity, 1239138.0);
        assert_eq!(activity.unit, "m³");
        assert_eq!(activity.row_number, 2);
    }

    #[test]
    fn test_map_tolerates_thousands_separator() {
        let mapper = FieldMapper;
        let mut row = full_row();
        row.insert("活动数据".to_string(), "1,239,138".to_string());

        let activity = mapper.map_to_activity_row(&row, 2).unwrap();
        assert_eq!(activity.activity_quantity, 1239138.0);
    }

    #[test]
    fn test_map_non_numeric_quantity_fails_with_row_number() {
        let mapper = FieldMapper;
        let mut row = full_row();
        row.insert("活动数据".to_string(), "约一百万".to_string());

        let err = mapper.map_to_activity_row(&row, 5).unwrap_err();
        match err {
            ImportError::TypeConversionError { row, field, .. } => {
                assert_eq!(row, 5);
                assert_eq!(field, "活动数据");
            }
            other => panic!("期望 TypeConversionError, 实际 {:?}", other),
        }
    }

    #[test]
    fn test_map_empty_quantity_fails() {
        let mapper = FieldMapper;
        let mut row = full_row();
        row.insert("活动数据".to_string(), "".to_string());

        let err = mapper.map_to_activity_row(&row, 3).unwrap_err();
        assert!(matches!(err, ImportError::TypeConversionError { row: 3, .. }));
    }

    #[test]
    fn test_map_missing_string_cell_becomes_empty() {
        // 字符串列缺失不阻断导入,留给匹配状态暴露
        let mapper = FieldMapper;
        let mut row = full_row();
        row.remove("设施/过程");

        let activity = mapper.map_to_activity_row(&row, 2).unwrap();
        assert_eq!(activity.facility_or_process, "");
    }
}
