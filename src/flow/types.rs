use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::UiDataError;

/// One display-ready message from a Kratos flow, e.g. a validation error.
///
/// Kratos emits these both at the flow level (`ui.messages`) and attached to
/// individual nodes (`ui.nodes[].messages`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowError {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "type", default)]
    pub error_type: String,
    #[serde(default)]
    pub text: String,
}

impl FlowError {
    /// Message record in the shape the renderers expect: `{id: 0, type: "error"}`.
    pub(crate) fn error(text: impl Into<String>) -> Self {
        Self {
            id: 0,
            error_type: "error".to_string(),
            text: text.into(),
        }
    }
}

/// Text attribute of a node. The lookup-secret codes node carries its
/// individual codes inside `context.secrets`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiText {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub context: Option<UiTextContext>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiTextContext {
    #[serde(default)]
    pub secrets: Vec<UiText>,
}

/// Attributes of a UI node. Which fields Kratos fills in depends on the node
/// kind, so everything is optional. `value` stays loosely typed: Kratos puts
/// strings, booleans and nulls there depending on the input type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeAttributes {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(default)]
    pub src: Option<String>,
    #[serde(default)]
    pub width: Option<i64>,
    #[serde(default)]
    pub height: Option<i64>,
    #[serde(default)]
    pub text: Option<UiText>,
}

/// One form element or informational unit of a flow's UI description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiNode {
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub attributes: NodeAttributes,
    #[serde(default)]
    pub messages: Vec<FlowError>,
}

/// The `ui` container of a flow response. `nodes` and `messages` are kept as
/// `Option` because the extractors distinguish absent from empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiContainer {
    #[serde(default)]
    pub nodes: Option<Vec<UiNode>>,
    #[serde(default)]
    pub messages: Option<Vec<FlowError>>,
}

/// Envelope of a Kratos self-service flow response, i.e. the `data` payload
/// returned by the client SDK for login, settings, verification etc. flows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowData {
    pub ui: UiContainer,
}

impl FlowData {
    /// Deserialize a raw response body.
    pub fn from_json(body: &str) -> Result<Self, UiDataError> {
        serde_json::from_str(body).map_err(|e| UiDataError::Serde(e.to_string()))
    }
}

impl TryFrom<Value> for FlowData {
    type Error = UiDataError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        if value.get("ui").is_none() {
            return Err(UiDataError::MissingField("ui".to_string()));
        }
        serde_json::from_value(value).map_err(|e| UiDataError::Serde(e.to_string()))
    }
}
