// src/document/resources.rs
use bevy::prelude::*;
use thiserror::Error;

use super::definitions::{DocumentMeta, TableRow};

/// Rejected page jump; the message names the valid range for the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("页码超出范围，有效范围为 1-{total_pages}")]
pub struct PageOutOfRange {
    pub total_pages: usize,
}

/// Owns the live document, the default snapshot it can instantly revert to,
/// and the current page of the client-side pagination.
///
/// The snapshot fields are never aliased with the live state: every
/// restore/adopt is a deep copy, so edits to one side never leak into the
/// other. Restore is synchronous and performs no IO (the "instant" product
/// guarantee); all disk access lives in `systems::io`.
#[derive(Resource, Debug, Clone)]
pub struct DocumentState {
    pub rows: Vec<TableRow>,
    pub meta: DocumentMeta,
    default_rows: Vec<TableRow>,
    default_meta: DocumentMeta,
    /// 1-indexed, always within `[1, total_pages(..)]`.
    pub current_page: usize,
}

impl Default for DocumentState {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            meta: DocumentMeta::default(),
            default_rows: Vec::new(),
            default_meta: DocumentMeta::default(),
            current_page: 1,
        }
    }
}

impl DocumentState {
    /// Installs loaded (or generated) content as both the live state and the
    /// default snapshot. Used once at startup.
    pub fn seed(&mut self, rows: Vec<TableRow>, meta: DocumentMeta) {
        self.default_rows = rows.clone();
        self.default_meta = meta.clone();
        self.rows = rows;
        self.meta = meta;
        self.current_page = 1;
    }

    pub fn default_rows(&self) -> &[TableRow] {
        &self.default_rows
    }

    pub fn default_meta(&self) -> &DocumentMeta {
        &self.default_meta
    }

    /// Replaces the live state with a deep copy of the default snapshot and
    /// resets pagination. No IO on this path.
    pub fn restore_default(&mut self) {
        self.rows = self.default_rows.clone();
        self.meta = self.default_meta.clone();
        self.current_page = 1;
    }

    /// Deep-copies the live state into the default snapshot. Persisting the
    /// copy is the caller's concern; the in-memory snapshot is updated even
    /// when the durable write later fails.
    pub fn adopt_live_as_default(&mut self) {
        self.default_rows = self.rows.clone();
        self.default_meta = self.meta.clone();
    }

    /// Replaces the live rows (text import). Metadata is untouched,
    /// pagination resets.
    pub fn replace_rows(&mut self, rows: Vec<TableRow>) {
        self.rows = rows;
        self.current_page = 1;
    }

    pub fn row_mut(&mut self, id: u32) -> Option<&mut TableRow> {
        self.rows.iter_mut().find(|row| row.id == id)
    }

    /// Character count over the two free-text columns.
    pub fn word_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| {
                row.opinion_content.chars().count()
                    + row.modification_suggestion.chars().count()
            })
            .sum()
    }

    /// `ceil(row_count / rows_per_page)`, floored at 1 so the page invariant
    /// stays satisfiable for an empty document.
    pub fn total_pages(&self, rows_per_page: usize) -> usize {
        let per_page = rows_per_page.max(1);
        self.rows.len().div_ceil(per_page).max(1)
    }

    /// The slice of rows on the current page.
    pub fn page_rows(&self, rows_per_page: usize) -> &[TableRow] {
        let per_page = rows_per_page.max(1);
        let start = (self.current_page - 1) * per_page;
        let end = (start + per_page).min(self.rows.len());
        if start >= self.rows.len() {
            &[]
        } else {
            &self.rows[start..end]
        }
    }

    /// Returns true when the page actually changed.
    pub fn next_page(&mut self, rows_per_page: usize) -> bool {
        let total = self.total_pages(rows_per_page);
        if self.current_page < total {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Returns true when the page actually changed.
    pub fn prev_page(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Validated jump; on rejection the current page is left untouched.
    pub fn jump_to_page(
        &mut self,
        page: usize,
        rows_per_page: usize,
    ) -> Result<(), PageOutOfRange> {
        let total = self.total_pages(rows_per_page);
        if page == 0 || page > total {
            return Err(PageOutOfRange { total_pages: total });
        }
        self.current_page = page;
        Ok(())
    }

    /// Implicit reset used by import, restore and page-size changes.
    pub fn reset_page(&mut self) {
        self.current_page = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::definitions::RowField;

    fn row(id: u32) -> TableRow {
        TableRow {
            id,
            serial_number: id,
            clause_number: format!("4.{}", id),
            opinion_content: format!("意见{}", id),
            modification_suggestion: format!("建议{}", id),
            proposing_unit: "某单位".to_string(),
            handling_opinion: "采纳".to_string(),
            remarks: String::new(),
        }
    }

    fn doc_with(n: u32) -> DocumentState {
        let mut doc = DocumentState::default();
        doc.seed((1..=n).map(row).collect(), DocumentMeta::default());
        doc
    }

    #[test]
    fn total_pages_is_ceiling_floored_at_one() {
        for (count, per_page, expected) in [
            (0u32, 5usize, 1usize),
            (1, 5, 1),
            (5, 5, 1),
            (6, 5, 2),
            (35, 5, 7),
            (35, 7, 5),
            (35, 1, 35),
        ] {
            let doc = doc_with(count);
            assert_eq!(
                doc.total_pages(per_page),
                expected,
                "count={} per_page={}",
                count,
                per_page
            );
        }
    }

    #[test]
    fn next_and_prev_clamp_at_the_edges() {
        let mut doc = doc_with(12);
        assert!(!doc.prev_page());
        assert_eq!(doc.current_page, 1);

        assert!(doc.next_page(5));
        assert!(doc.next_page(5));
        assert!(!doc.next_page(5));
        assert_eq!(doc.current_page, 3);

        assert!(doc.prev_page());
        assert_eq!(doc.current_page, 2);
    }

    #[test]
    fn rejected_jump_leaves_current_page_unchanged() {
        let mut doc = doc_with(12);
        doc.jump_to_page(2, 5).unwrap();

        let err = doc.jump_to_page(0, 5).unwrap_err();
        assert_eq!(err.total_pages, 3);
        assert_eq!(doc.current_page, 2);

        assert!(doc.jump_to_page(4, 5).is_err());
        assert_eq!(doc.current_page, 2);

        doc.jump_to_page(3, 5).unwrap();
        assert_eq!(doc.current_page, 3);
    }

    #[test]
    fn page_rows_slices_the_current_page() {
        let mut doc = doc_with(12);
        assert_eq!(doc.page_rows(5).len(), 5);
        doc.jump_to_page(3, 5).unwrap();
        let last = doc.page_rows(5);
        assert_eq!(last.len(), 2);
        assert_eq!(last[0].id, 11);
    }

    #[test]
    fn import_and_restore_reset_pagination() {
        let mut doc = doc_with(20);
        doc.jump_to_page(4, 5).unwrap();
        doc.replace_rows((1..=8).map(row).collect());
        assert_eq!(doc.current_page, 1);

        doc.jump_to_page(2, 5).unwrap();
        doc.restore_default();
        assert_eq!(doc.current_page, 1);
    }

    #[test]
    fn restore_is_idempotent_and_matches_snapshot() {
        let mut doc = doc_with(6);
        RowField::OpinionContent.apply(doc.row_mut(3).unwrap(), "改动");
        doc.replace_rows(doc.rows.clone());

        doc.restore_default();
        let first = doc.clone();
        doc.restore_default();

        assert_eq!(doc.rows, first.rows);
        assert_eq!(doc.meta, first.meta);
        assert_eq!(doc.rows, doc.default_rows);
        assert_eq!(doc.meta, doc.default_meta);
    }

    #[test]
    fn adopt_then_restore_leaves_live_state_unchanged() {
        let mut doc = doc_with(6);
        RowField::Remarks.apply(doc.row_mut(2).unwrap(), "待定");
        doc.meta.drafting_unit_value = "某起草单位".to_string();

        let live_rows = doc.rows.clone();
        let live_meta = doc.meta.clone();

        doc.adopt_live_as_default();
        doc.restore_default();

        assert_eq!(doc.rows, live_rows);
        assert_eq!(doc.meta, live_meta);
    }

    #[test]
    fn editing_one_row_field_leaves_the_rest_untouched() {
        let mut doc = doc_with(6);
        let before = doc.rows.clone();

        RowField::HandlingOpinion.apply(doc.row_mut(4).unwrap(), "不采纳");

        for (i, (old, new)) in before.iter().zip(doc.rows.iter()).enumerate() {
            if old.id == 4 {
                assert_eq!(new.handling_opinion, "不采纳");
                let mut reverted = new.clone();
                reverted.handling_opinion = old.handling_opinion.clone();
                assert_eq!(&reverted, old);
            } else {
                assert_eq!(old, new, "row index {} changed unexpectedly", i);
            }
        }
    }

    #[test]
    fn word_count_covers_the_two_text_columns() {
        let mut doc = DocumentState::default();
        let mut a = row(1);
        a.opinion_content = "四个字的话".to_string(); // 5 chars
        a.modification_suggestion = "abc".to_string(); // 3 chars
        doc.seed(vec![a], DocumentMeta::default());
        assert_eq!(doc.word_count(), 8);
    }
}
