//! Google Sheets import endpoints (responses are not enveloped)

use serde::Serialize;
use serde_json::json;
use tracing::info;

use super::client::ApiClient;
use crate::error::ApiResult;
use crate::models::{AuthUrl, GoogleStatus, ImportSummary, MappingSuggestion, PreviewData, SpreadsheetInfo};

/// Column index → target field pair sent to `/google/import`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingSelection {
    pub sheet_column_index: u32,
    pub mapped_field: String,
}

/// Body of `POST /google/import`; rows are re-read by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRequest {
    pub spreadsheet_id: String,
    pub mappings: Vec<MappingSelection>,
}

/// Everything the mapping step shows for one spreadsheet
#[derive(Debug, Clone, PartialEq)]
pub struct SheetBundle {
    pub info: SpreadsheetInfo,
    pub preview: PreviewData,
    pub suggestion: MappingSuggestion,
}

impl ApiClient {
    pub async fn google_status(&self) -> ApiResult<bool> {
        let status: GoogleStatus = self.get("/google/status").await?;
        Ok(status.authenticated)
    }

    pub async fn google_auth_url(&self) -> ApiResult<String> {
        let url: AuthUrl = self.get("/google/auth-url").await?;
        Ok(url.auth_url)
    }

    /// Exchange the pasted authorization code
    pub async fn google_callback(&self, code: &str) -> ApiResult<()> {
        self.post_unit("/google/callback", &json!({ "code": code })).await
    }

    /// Metadata, preview rows and suggested mapping, fetched concurrently
    pub async fn load_spreadsheet(&self, spreadsheet_id: &str) -> ApiResult<SheetBundle> {
        let base = format!("/google/spreadsheet/{}", spreadsheet_id);
        let preview_path = format!("{}/preview", base);
        let mapping_path = format!("{}/mapping", base);
        let (info, preview, suggestion) = futures::try_join!(
            self.get::<SpreadsheetInfo>(&base),
            self.get::<PreviewData>(&preview_path),
            self.get::<MappingSuggestion>(&mapping_path),
        )?;
        Ok(SheetBundle { info, preview, suggestion })
    }

    pub async fn import_sheet(&self, request: &ImportRequest) -> ApiResult<ImportSummary> {
        let summary: ImportSummary = self.post("/google/import", request).await?;
        info!(
            spreadsheet = %request.spreadsheet_id,
            imported = summary.imported,
            skipped = summary.skipped,
            "sheet imported"
        );
        Ok(summary)
    }
}
