use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Inbound event envelope. `event_id` takes any JSON value and is only ever
/// logged; a missing `data` envelope is a malformed request.
#[derive(Debug, Deserialize)]
pub struct HttpEvent {
    #[serde(rename = "eventID", default)]
    pub event_id: Value,
    pub data: Option<EventData>,
}

/// A missing `body` deserializes to `null` and echoes back as `null`.
#[derive(Debug, Deserialize)]
pub struct EventData {
    #[serde(default)]
    pub body: Value,
}

#[derive(Debug, Serialize)]
pub struct EchoResponse {
    pub body: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<&'static HashMap<String, String>>,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn response_omits_headers_key_when_none() {
        let response = EchoResponse {
            body: json!("hello"),
            headers: None,
            status_code: 200,
        };
        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("headers").is_none());
        assert_eq!(value["statusCode"], json!(200));
    }

    #[test]
    fn event_defaults_missing_fields_to_null() {
        let event: HttpEvent = serde_json::from_str(r#"{"data": {}}"#).unwrap();
        assert_eq!(event.event_id, Value::Null);
        assert_eq!(event.data.unwrap().body, Value::Null);
    }
}
