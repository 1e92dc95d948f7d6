use serde_json::Value;

use crate::flow::types::FlowData;

/// Extracts the anti-forgery token Kratos echoes back in a hidden input node.
/// The token must be resubmitted with every flow form submission.
///
/// First match wins; returns an empty string when no node carries one or the
/// value is not a string.
pub fn extract_csrf_token(data: &FlowData) -> String {
    data.ui
        .nodes
        .iter()
        .flatten()
        .find(|node| node.attributes.name.as_deref() == Some("csrf_token"))
        .and_then(|node| node.attributes.value.as_ref())
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
