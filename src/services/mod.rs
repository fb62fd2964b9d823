/// Create and list operations over an injected [`StatusStore`](crate::db::StatusStore).
pub mod status;

pub use status::StatusService;
