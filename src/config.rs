//! Backend Configuration
//!
//! Static connection credentials for the document database, supplied
//! once at startup.

use serde::{Deserialize, Serialize};

/// Firestore web-app credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirestoreConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub storage_bucket: String,
    pub messaging_sender_id: String,
    pub app_id: String,
}
