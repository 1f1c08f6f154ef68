use crate::domain::AlbRequestEvent;
use std::convert::TryFrom;
use std::fmt;
use std::fmt::Formatter;

/// Payload delivered to the function. Its fields are never interpreted, so any
/// JSON document is a valid event.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct InvocationEvent(serde_json::Value);

impl InvocationEvent {
    pub fn new(payload: serde_json::Value) -> Self {
        Self(payload)
    }

    #[cfg(test)]
    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }
}

impl Default for InvocationEvent {
    fn default() -> Self {
        Self(serde_json::Value::Object(serde_json::Map::new()))
    }
}

impl TryFrom<AlbRequestEvent> for InvocationEvent {
    type Error = serde_json::Error;

    fn try_from(event: AlbRequestEvent) -> Result<Self, Self::Error> {
        serde_json::to_value(event).map(Self)
    }
}

impl fmt::Display for InvocationEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
