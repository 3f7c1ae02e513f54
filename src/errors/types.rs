use serde::{Deserialize, Serialize};
use std::any::Any;
/// Error payload produced when a captured operation panics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panic {
    pub message: String,
    pub thread: Option<String>,
}
impl Panic {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            thread: std::thread::current().name().map(str::to_string),
        }
    }
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        Self::new(payload_message(payload.as_ref()))
    }
    pub fn message(&self) -> &str {
        &self.message
    }
}
impl std::fmt::Display for Panic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}
impl std::error::Error for Panic {}
impl From<Panic> for String {
    fn from(panic: Panic) -> Self {
        panic.message
    }
}
pub(crate) fn payload_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(p) = payload.downcast_ref::<Panic>() {
        p.message.clone()
    } else {
        "Box<dyn Any>".to_string()
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn test_message_from_static_str_payload() {
        let panic = Panic::from_payload(Box::new("boom"));
        assert_eq!(panic.message(), "boom");
        assert_eq!(panic.to_string(), "boom");
    }
    #[test]
    fn test_message_from_string_payload() {
        let panic = Panic::from_payload(Box::new(format!("bad index {}", 7)));
        assert_eq!(panic.message(), "bad index 7");
    }
    #[test]
    fn test_opaque_payload() {
        let panic = Panic::from_payload(Box::new(42_u8));
        assert_eq!(panic.message(), "Box<dyn Any>");
    }
    #[test]
    fn test_into_string_is_bare_message() {
        let s: String = Panic::new("fail").into();
        assert_eq!(s, "fail");
    }
    #[test]
    fn test_converts_into_anyhow() {
        let err: anyhow::Error = Panic::new("fail").into();
        assert_eq!(err.to_string(), "fail");
        assert!(err.downcast_ref::<Panic>().is_some());
    }
    #[test]
    fn test_serializes_as_json() {
        let panic = Panic {
            message: "boom".to_string(),
            thread: Some("worker".to_string()),
        };
        let json = serde_json::to_string(&panic).unwrap();
        assert_eq!(json, r#"{"message":"boom","thread":"worker"}"#);
        let back: Panic = serde_json::from_str(&json).unwrap();
        assert_eq!(back, panic);
    }
}
