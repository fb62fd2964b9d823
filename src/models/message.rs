use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fixed acknowledgment returned by the root endpoint.
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct RootMessage {
    pub message: String,
}

impl RootMessage {
    pub fn hello() -> Self {
        Self {
            message: "Hello World".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hello_payload() {
        let json = serde_json::to_string(&RootMessage::hello()).unwrap();
        assert_eq!(json, r#"{"message":"Hello World"}"#);
    }
}
