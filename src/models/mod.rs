/// # Root Acknowledgment
///
/// Constant payload served by `GET /api/`.
///
/// ## Example JSON
/// ```json
/// { "message": "Hello World" }
/// ```
pub mod message;

/// # Status Records
///
/// The API-facing [`StatusRecord`](status::StatusRecord), its creation
/// request and the BSON document stored in the `status_checks` collection.
pub mod status;

pub use message::RootMessage;
pub use status::{StatusDocument, StatusRecord, StatusRecordCreate};
