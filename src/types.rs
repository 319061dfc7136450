// src/types.rs
use serde::{Deserialize, Serialize};

/// One certificate entry from a crt.sh JSON response.
///
/// All fields are carried verbatim from the upstream payload; nothing is
/// computed or normalized locally. `name_value` may contain embedded newlines
/// when a certificate covers multiple names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificateRecord {
    pub issuer_ca_id: i64,
    pub issuer_name: String,
    pub name_value: String,
    pub min_cert_id: i64,
    pub min_entry_timestamp: String,
    pub not_before: String,
    pub not_after: String,
}
