use serde::{Deserialize, Serialize};

use crate::facet::{ClassDuration, ClassFormat, ClassMode, ClassSize, PaymentModel};
use crate::types::identifiers::CatalogEntryId;

/// One browsable course. Immutable once part of a [`super::Catalog`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: CatalogEntryId,
    pub title: String,
    pub tutor_name: String,
    pub tutor_id: String,
    /// In `[0, 5]`.
    pub rating: f32,
    pub mode: ClassMode,
    pub format: ClassFormat,
    pub size: ClassSize,
    // Shown on detail screens only; the filter engine never matches these.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<ClassDuration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_model: Option<PaymentModel>,
    /// Enrollment status as shown on the "my classes" tabs, e.g. `"Ongoing"`.
    pub status: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
}

impl CatalogEntry {
    pub fn has_status(&self, status: &str) -> bool {
        self.status.eq_ignore_ascii_case(status)
    }
}
