use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::device::DeviceId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(pub u64);

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    Manual,
    Warranty,
    Certificate,
    Invoice,
    Other,
}

impl DocumentType {
    pub fn label(self) -> &'static str {
        match self {
            DocumentType::Manual => "Manual",
            DocumentType::Warranty => "Garantía",
            DocumentType::Certificate => "Certificado",
            DocumentType::Invoice => "Factura",
            DocumentType::Other => "Otro",
        }
    }
}

/// A file reference attached to one device. `file_path` is an opaque URL.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    #[serde(default)]
    pub device: Option<DeviceId>,
    pub document_type: DocumentType,
    pub title: String,
    pub file_path: String,
    #[serde(default)]
    pub upload_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentPayload {
    pub device: DeviceId,
    pub document_type: DocumentType,
    pub title: String,
    pub file_path: String,
    pub description: String,
}
