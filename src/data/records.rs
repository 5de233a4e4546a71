//! Raw record shapes returned by the worker/certification API.
//!
//! Only the fields the pipeline reads are decoded; everything else in the
//! payload (username, address, website, catch phrase, ...) is ignored.

use serde::Deserialize;

/// A worker ("user") as returned by `GET /users`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawWorkerRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: Organization,
}

/// Nested organization the worker belongs to.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Organization {
    pub name: String,
}

/// A certification ("post") as returned by `GET /posts`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCertificationRecord {
    /// Owning worker id.
    pub user_id: i64,
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}
