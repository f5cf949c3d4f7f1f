//! Uploaded File Model

use serde::{Deserialize, Serialize};

/// Result of a file upload: where the file landed and what it is
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    pub url: String,
    pub name: String,
    pub size: i64,
}
