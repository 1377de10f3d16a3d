// src/document/definitions.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// One feedback row of the opinion summary table.
///
/// `id` is unique within a document and stable across edits; it is the sole
/// lookup key for cell updates. No field carries a serde default on purpose:
/// a stored document that is missing a field (or has the wrong type) fails
/// deserialization as a whole and is treated as absent by the loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub id: u32,
    pub serial_number: u32,
    pub clause_number: String,
    pub opinion_content: String,
    pub modification_suggestion: String,
    pub proposing_unit: String,
    pub handling_opinion: String,
    pub remarks: String,
}

/// Names the editable columns of a [`TableRow`]. A cell edit event carries a
/// `RowField` so exactly one field of one row changes per event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowField {
    ClauseNumber,
    OpinionContent,
    ModificationSuggestion,
    ProposingUnit,
    HandlingOpinion,
    Remarks,
}

impl RowField {
    pub fn get<'a>(&self, row: &'a TableRow) -> &'a str {
        match self {
            RowField::ClauseNumber => &row.clause_number,
            RowField::OpinionContent => &row.opinion_content,
            RowField::ModificationSuggestion => &row.modification_suggestion,
            RowField::ProposingUnit => &row.proposing_unit,
            RowField::HandlingOpinion => &row.handling_opinion,
            RowField::Remarks => &row.remarks,
        }
    }

    pub fn apply(&self, row: &mut TableRow, value: &str) {
        let slot = match self {
            RowField::ClauseNumber => &mut row.clause_number,
            RowField::OpinionContent => &mut row.opinion_content,
            RowField::ModificationSuggestion => &mut row.modification_suggestion,
            RowField::ProposingUnit => &mut row.proposing_unit,
            RowField::HandlingOpinion => &mut row.handling_opinion,
            RowField::Remarks => &mut row.remarks,
        };
        *slot = value.to_string();
    }
}

impl fmt::Display for RowField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RowField::ClauseNumber => "标准章条编号",
            RowField::OpinionContent => "意见内容",
            RowField::ModificationSuggestion => "修改建议",
            RowField::ProposingUnit => "提出单位",
            RowField::HandlingOpinion => "处理意见",
            RowField::Remarks => "备注",
        };
        write!(f, "{}", label)
    }
}

/// Header/footer label-value pairs of the document. Singleton per document,
/// mutated field-by-field on edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMeta {
    pub title: String,
    pub project_name: String,
    pub drafting_unit_label: String,
    pub drafting_unit_value: String,
    pub page_info_prefix: String,
    pub page_info_suffix: String,
    pub contractor_label: String,
    pub date_label: String,
    pub footer_note: String,
}

impl Default for DocumentMeta {
    fn default() -> Self {
        Self {
            title: "意见汇总表".to_string(),
            project_name: "人形机器人技术要求 第6部分：定位导航".to_string(),
            drafting_unit_label: "负责起草单位：".to_string(),
            drafting_unit_value: String::new(),
            page_info_prefix: "共".to_string(),
            page_info_suffix: "页 第".to_string(),
            contractor_label: "承办人：".to_string(),
            date_label: "年 月 日填写".to_string(),
            footer_note: "注：技术审查会时需填写“处理意见”。".to_string(),
        }
    }
}

/// Names the editable fields of [`DocumentMeta`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaField {
    Title,
    ProjectName,
    DraftingUnitLabel,
    DraftingUnitValue,
    PageInfoPrefix,
    PageInfoSuffix,
    ContractorLabel,
    DateLabel,
    FooterNote,
}

impl MetaField {
    pub fn get<'a>(&self, meta: &'a DocumentMeta) -> &'a str {
        match self {
            MetaField::Title => &meta.title,
            MetaField::ProjectName => &meta.project_name,
            MetaField::DraftingUnitLabel => &meta.drafting_unit_label,
            MetaField::DraftingUnitValue => &meta.drafting_unit_value,
            MetaField::PageInfoPrefix => &meta.page_info_prefix,
            MetaField::PageInfoSuffix => &meta.page_info_suffix,
            MetaField::ContractorLabel => &meta.contractor_label,
            MetaField::DateLabel => &meta.date_label,
            MetaField::FooterNote => &meta.footer_note,
        }
    }

    pub fn apply(&self, meta: &mut DocumentMeta, value: &str) {
        let slot = match self {
            MetaField::Title => &mut meta.title,
            MetaField::ProjectName => &mut meta.project_name,
            MetaField::DraftingUnitLabel => &mut meta.drafting_unit_label,
            MetaField::DraftingUnitValue => &mut meta.drafting_unit_value,
            MetaField::PageInfoPrefix => &mut meta.page_info_prefix,
            MetaField::PageInfoSuffix => &mut meta.page_info_suffix,
            MetaField::ContractorLabel => &mut meta.contractor_label,
            MetaField::DateLabel => &mut meta.date_label,
            MetaField::FooterNote => &mut meta.footer_note,
        };
        *slot = value.to_string();
    }
}

impl fmt::Display for MetaField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> TableRow {
        TableRow {
            id: 7,
            serial_number: 7,
            clause_number: "5.2".to_string(),
            opinion_content: "原始意见".to_string(),
            modification_suggestion: "原始建议".to_string(),
            proposing_unit: "某单位".to_string(),
            handling_opinion: "采纳".to_string(),
            remarks: String::new(),
        }
    }

    #[test]
    fn row_field_apply_touches_only_named_field() {
        let before = sample_row();
        let mut row = before.clone();
        RowField::HandlingOpinion.apply(&mut row, "不采纳");

        assert_eq!(row.handling_opinion, "不采纳");
        let mut reverted = row.clone();
        reverted.handling_opinion = before.handling_opinion.clone();
        assert_eq!(reverted, before);
    }

    #[test]
    fn row_field_get_matches_apply_slot() {
        let mut row = sample_row();
        for field in [
            RowField::ClauseNumber,
            RowField::OpinionContent,
            RowField::ModificationSuggestion,
            RowField::ProposingUnit,
            RowField::HandlingOpinion,
            RowField::Remarks,
        ] {
            field.apply(&mut row, "x");
            assert_eq!(field.get(&row), "x");
        }
    }

    #[test]
    fn stored_row_missing_field_fails_shape_validation() {
        let json = r#"{"id":1,"serial_number":1,"clause_number":"4.1"}"#;
        assert!(serde_json::from_str::<TableRow>(json).is_err());
    }
}
