use chrono::{DateTime, SubsecRound, Utc};
use mongodb::bson;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// # Status Record
///
/// A single status check submitted by a client. Records are created once and
/// never updated.
///
/// ## Example JSON
/// ```json
/// {
///   "id": "0f8e6a52-7a3b-4c7e-9d0a-1c7f1f1b2a33",
///   "client_name": "acme",
///   "timestamp": "2024-03-10T15:30:45.123Z"
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct StatusRecord {
    pub id: String,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

impl StatusRecord {
    /// Builds a new record with a fresh v4 UUID and the current UTC time.
    ///
    /// The timestamp is truncated to milliseconds, the precision of a BSON
    /// datetime, so the record returned to the caller matches the stored one.
    pub fn new(client_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            client_name: client_name.into(),
            timestamp: Utc::now().trunc_subsecs(3),
        }
    }
}

/// Request body for `POST /status`.
#[derive(Deserialize, Debug, ToSchema)]
pub struct StatusRecordCreate {
    pub client_name: String,
}

/// Persisted shape of a [`StatusRecord`] in the `status_checks` collection.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StatusDocument {
    pub id: String,
    pub client_name: String,
    pub timestamp: bson::DateTime,
}

impl From<&StatusRecord> for StatusDocument {
    fn from(record: &StatusRecord) -> Self {
        Self {
            id: record.id.clone(),
            client_name: record.client_name.clone(),
            timestamp: bson::DateTime::from_millis(record.timestamp.timestamp_millis()),
        }
    }
}

impl TryFrom<StatusDocument> for StatusRecord {
    type Error = i64;

    /// Fails with the raw millisecond value when the stored datetime is
    /// outside the range chrono can represent.
    fn try_from(document: StatusDocument) -> Result<Self, Self::Error> {
        let millis = document.timestamp.timestamp_millis();
        let timestamp = DateTime::<Utc>::from_timestamp_millis(millis).ok_or(millis)?;
        Ok(Self {
            id: document.id,
            client_name: document.client_name,
            timestamp,
        })
    }
}
