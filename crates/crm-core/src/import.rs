//! Spreadsheet Import Wizard
//!
//! Authenticate → load sheet (metadata, preview, suggested mapping) →
//! adjust mappings → import. Only the final step writes anything.

use std::sync::OnceLock;

use regex::Regex;
use tracing::warn;

use crate::api::{ApiClient, ImportRequest, MappingSelection, SheetBundle};
use crate::error::{ApiError, ApiResult};
use crate::models::{AvailableField, ColumnMapping, ImportSummary, PreviewData, SpreadsheetInfo};

/// Sentinel target: column is ignored
pub const SKIP_FIELD: &str = "skip";

pub const INVALID_SHEET_URL: &str = "Geçersiz Google Sheets URL'si";

/// Preview rows returned by the backend
pub const PREVIEW_ROWS: u32 = 10;

fn sheet_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"/spreadsheets/d/([a-zA-Z0-9-_]+)").expect("static pattern"))
}

/// Spreadsheet id from a pasted Google Sheets URL
pub fn extract_spreadsheet_id(url: &str) -> ApiResult<String> {
    sheet_id_pattern()
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| ApiError::InvalidInput(INVALID_SHEET_URL.to_string()))
}

/// Validate the URL locally, then fetch everything the mapping step shows
pub async fn load_sheet(client: &ApiClient, url: &str) -> ApiResult<(String, SheetBundle)> {
    let id = extract_spreadsheet_id(url)?;
    let bundle = client.load_spreadsheet(&id).await?;
    Ok((id, bundle))
}

/// How a mapping row is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingTone {
    /// Ignored column, de-emphasized
    Skipped,
    /// Suggested by the backend
    Auto,
    /// Changed by the user
    Manual,
}

impl MappingTone {
    pub fn of(mapping: &ColumnMapping) -> Self {
        if mapping.mapped_field == SKIP_FIELD {
            MappingTone::Skipped
        } else if mapping.auto_matched {
            MappingTone::Auto
        } else {
            MappingTone::Manual
        }
    }

    pub fn row_class(self) -> &'static str {
        match self {
            MappingTone::Skipped => "bg-gray-50",
            MappingTone::Auto => "bg-green-50",
            MappingTone::Manual => "bg-blue-50",
        }
    }

    pub fn select_class(self) -> &'static str {
        match self {
            MappingTone::Skipped => "border-gray-300 text-gray-400",
            MappingTone::Auto => "border-green-300",
            MappingTone::Manual => "border-blue-300",
        }
    }

    /// Pill text; none for skipped columns
    pub fn tag(self) -> Option<&'static str> {
        match self {
            MappingTone::Skipped => None,
            MappingTone::Auto => Some("Otomatik"),
            MappingTone::Manual => Some("Manuel"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportWizard {
    pub authenticated: bool,
    pub auth_url: Option<String>,
    spreadsheet_id: Option<String>,
    info: Option<SpreadsheetInfo>,
    preview: Option<PreviewData>,
    mappings: Vec<ColumnMapping>,
    available_fields: Vec<AvailableField>,
    result: Option<ImportSummary>,
}

impl ImportWizard {
    /// Code exchange succeeded (or status says so)
    pub fn set_authenticated(&mut self, authenticated: bool) {
        self.authenticated = authenticated;
        if authenticated {
            self.auth_url = None;
        }
    }

    /// Replace sheet state; a previous import result is cleared
    pub fn load(&mut self, spreadsheet_id: String, bundle: SheetBundle) {
        self.spreadsheet_id = Some(spreadsheet_id);
        self.info = Some(bundle.info);
        self.preview = Some(bundle.preview);
        self.mappings = bundle.suggestion.mappings;
        self.available_fields = bundle.suggestion.available_fields;
        self.result = None;
    }

    pub fn is_loaded(&self) -> bool {
        self.spreadsheet_id.is_some()
    }

    pub fn info(&self) -> Option<&SpreadsheetInfo> {
        self.info.as_ref()
    }

    pub fn preview(&self) -> Option<&PreviewData> {
        self.preview.as_ref()
    }

    pub fn mappings(&self) -> &[ColumnMapping] {
        &self.mappings
    }

    pub fn available_fields(&self) -> &[AvailableField] {
        &self.available_fields
    }

    pub fn result(&self) -> Option<ImportSummary> {
        self.result
    }

    pub fn set_result(&mut self, summary: ImportSummary) {
        self.result = Some(summary);
    }

    pub fn clear_result(&mut self) {
        self.result = None;
    }

    /// Re-target the mapping at `position`; it is no longer auto-matched
    pub fn update_mapping(&mut self, position: usize, field: &str) -> bool {
        match self.mappings.get_mut(position) {
            Some(mapping) => {
                mapping.mapped_field = field.to_string();
                mapping.auto_matched = false;
                true
            }
            None => {
                warn!(position, "mapping index out of range");
                false
            }
        }
    }

    pub fn mapped_count(&self) -> usize {
        self.mappings.iter().filter(|m| m.mapped_field != SKIP_FIELD).count()
    }

    pub fn unmapped_count(&self) -> usize {
        self.mappings.len() - self.mapped_count()
    }

    /// Import is offered once at least one column feeds a field
    pub fn can_import(&self) -> bool {
        self.is_loaded() && self.mapped_count() > 0
    }

    fn mapping_for_column(&self, column: usize) -> Option<&ColumnMapping> {
        self.mappings.iter().find(|m| m.sheet_column_index as usize == column)
    }

    /// Preview cells of skipped columns are greyed out
    pub fn column_skipped(&self, column: usize) -> bool {
        self.mapping_for_column(column).is_some_and(|m| m.mapped_field == SKIP_FIELD)
    }

    /// Target field label shown under a preview header
    pub fn column_target_label(&self, column: usize) -> Option<&str> {
        let mapping = self.mapping_for_column(column)?;
        self.available_fields
            .iter()
            .find(|f| f.value == mapping.mapped_field && f.value != SKIP_FIELD)
            .map(|f| f.label.as_str())
    }

    /// Index/field pairs only; the backend re-reads the rows itself
    pub fn import_request(&self) -> Option<ImportRequest> {
        let spreadsheet_id = self.spreadsheet_id.clone()?;
        let mappings = self
            .mappings
            .iter()
            .map(|m| MappingSelection {
                sheet_column_index: m.sheet_column_index,
                mapped_field: m.mapped_field.clone(),
            })
            .collect();
        Some(ImportRequest { spreadsheet_id, mappings })
    }
}

/// Header text for an unnamed column
pub fn column_title(header: &str, position: usize) -> String {
    if header.trim().is_empty() {
        format!("Kolon {}", position + 1)
    } else {
        header.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MappingSuggestion;

    fn bundle() -> SheetBundle {
        let mapping = |idx: u32, col: &str, field: &str, auto: bool| ColumnMapping {
            sheet_column: col.into(),
            sheet_column_index: idx,
            mapped_field: field.into(),
            auto_matched: auto,
        };
        SheetBundle {
            info: SpreadsheetInfo { title: "Portföy".into(), sheets: vec![] },
            preview: PreviewData {
                headers: vec!["Ad".into(), "Telefon".into(), "Not".into()],
                rows: vec![vec!["Ali".into(), "0532".into(), "x".into()]],
                total_rows: 42,
            },
            suggestion: MappingSuggestion {
                mappings: vec![
                    mapping(0, "Ad", "firstName", true),
                    mapping(1, "Telefon", "phone", true),
                    mapping(2, "Not", SKIP_FIELD, false),
                ],
                available_fields: vec![
                    AvailableField { value: "firstName".into(), label: "Ad".into() },
                    AvailableField { value: "phone".into(), label: "Telefon".into() },
                    AvailableField { value: "notes".into(), label: "Notlar".into() },
                    AvailableField { value: SKIP_FIELD.into(), label: "Atla".into() },
                ],
            },
        }
    }

    #[test]
    fn test_extract_spreadsheet_id() {
        assert_eq!(
            extract_spreadsheet_id("https://docs.google.com/spreadsheets/d/ABC123/edit#gid=0").unwrap(),
            "ABC123"
        );
        assert_eq!(
            extract_spreadsheet_id("https://docs.google.com/spreadsheets/d/1a-B_c/edit").unwrap(),
            "1a-B_c"
        );
        let err = extract_spreadsheet_id("https://docs.google.com/document/d/ABC123").unwrap_err();
        assert_eq!(err, ApiError::InvalidInput(INVALID_SHEET_URL.to_string()));
    }

    #[tokio::test]
    async fn test_invalid_url_rejected_before_request() {
        // nothing listens here: reaching the network would yield a Network error
        let client = ApiClient::new("http://127.0.0.1:9/api");
        let err = load_sheet(&client, "https://example.com/sheet").await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }

    #[test]
    fn test_update_mapping_clears_auto_flag() {
        let mut wizard = ImportWizard::default();
        wizard.load("ABC".into(), bundle());
        assert_eq!(wizard.mapped_count(), 2);
        assert_eq!(MappingTone::of(&wizard.mappings()[2]), MappingTone::Skipped);

        assert!(wizard.update_mapping(2, "notes"));
        assert_eq!(MappingTone::of(&wizard.mappings()[2]), MappingTone::Manual);
        assert_eq!(wizard.mapped_count(), 3);
        assert!(!wizard.update_mapping(7, "notes"));
    }

    #[test]
    fn test_skipped_column_is_deemphasized() {
        let mut wizard = ImportWizard::default();
        wizard.load("ABC".into(), bundle());
        assert!(wizard.column_skipped(2));
        assert!(!wizard.column_skipped(0));
        assert_eq!(wizard.column_target_label(1), Some("Telefon"));
        assert_eq!(wizard.column_target_label(2), None);
    }

    #[test]
    fn test_import_request_has_only_pairs() {
        let mut wizard = ImportWizard::default();
        assert!(wizard.import_request().is_none());
        wizard.load("ABC".into(), bundle());
        let request = wizard.import_request().unwrap();
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["spreadsheetId"], "ABC");
        assert_eq!(
            body["mappings"][0],
            serde_json::json!({ "sheetColumnIndex": 0, "mappedField": "firstName" })
        );
        assert!(body["mappings"][0].get("sheetColumn").is_none());
    }

    #[test]
    fn test_nothing_mapped_blocks_import() {
        let mut wizard = ImportWizard::default();
        wizard.load("ABC".into(), bundle());
        wizard.update_mapping(0, SKIP_FIELD);
        wizard.update_mapping(1, SKIP_FIELD);
        assert_eq!(wizard.unmapped_count(), 3);
        assert!(!wizard.can_import());
    }

    #[test]
    fn test_column_title() {
        assert_eq!(column_title("", 3), "Kolon 4");
        assert_eq!(column_title("Telefon", 1), "Telefon");
    }
}
