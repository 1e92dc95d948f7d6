//! Shared fixture builders for node and flow payloads used across test modules.

use serde_json::Value;

use crate::flow::{FlowData, FlowError, NodeAttributes, UiContainer, UiNode, UiText, UiTextContext};

pub(crate) fn flow_with_nodes(nodes: Vec<UiNode>) -> FlowData {
    FlowData {
        ui: UiContainer {
            nodes: Some(nodes),
            messages: None,
        },
    }
}

pub(crate) fn flow_with_messages(messages: Vec<FlowError>) -> FlowData {
    FlowData {
        ui: UiContainer {
            nodes: None,
            messages: Some(messages),
        },
    }
}

pub(crate) fn message(id: i64, error_type: &str, text: &str) -> FlowError {
    FlowError {
        id,
        error_type: error_type.to_string(),
        text: text.to_string(),
    }
}

/// Node carrying only messages, as Kratos attaches validation errors to the
/// offending input node.
pub(crate) fn message_node(messages: Vec<FlowError>) -> UiNode {
    UiNode {
        group: "default".to_string(),
        attributes: NodeAttributes::default(),
        messages,
    }
}

pub(crate) fn input_node(group: &str, name: &str, value: Value) -> UiNode {
    UiNode {
        group: group.to_string(),
        attributes: NodeAttributes {
            name: Some(name.to_string()),
            value: Some(value),
            ..NodeAttributes::default()
        },
        messages: Vec::new(),
    }
}

pub(crate) fn image_node(group: &str, id: &str, src: &str, width: i64, height: i64) -> UiNode {
    UiNode {
        group: group.to_string(),
        attributes: NodeAttributes {
            id: Some(id.to_string()),
            src: Some(src.to_string()),
            width: Some(width),
            height: Some(height),
            ..NodeAttributes::default()
        },
        messages: Vec::new(),
    }
}

pub(crate) fn text_node(group: &str, id: &str, text: &str) -> UiNode {
    UiNode {
        group: group.to_string(),
        attributes: NodeAttributes {
            id: Some(id.to_string()),
            text: Some(UiText {
                text: text.to_string(),
                context: None,
            }),
            ..NodeAttributes::default()
        },
        messages: Vec::new(),
    }
}

/// The `lookup_secret_codes` node revealing recovery codes.
pub(crate) fn codes_node(codes: &[&str]) -> UiNode {
    UiNode {
        group: "lookup_secret".to_string(),
        attributes: NodeAttributes {
            id: Some("lookup_secret_codes".to_string()),
            text: Some(UiText {
                text: codes.join(", "),
                context: Some(UiTextContext {
                    secrets: codes
                        .iter()
                        .map(|code| UiText {
                            text: (*code).to_string(),
                            context: None,
                        })
                        .collect(),
                }),
            }),
            ..NodeAttributes::default()
        },
        messages: Vec::new(),
    }
}
