use serde_json::Value;

use crate::flow::types::{FlowData, FlowError};

/// Extracts display-ready error messages from an error payload returned by the
/// Kratos client SDK, such as the body of a 400 response to a flow submission.
///
/// The first entry is always a debug record serializing the whole input, so
/// callers have something to show even for payloads we do not recognize.
/// Recognized shapes:
/// - `response.data.error.reason`: a non-UI error, the reason is appended.
/// - `response.data.ui`: a flow payload, its UI messages are returned instead
///   of the debug record (kept for compatibility with existing renderers).
/// - anything else under `response.data`: serialized and appended as-is.
///
/// Never fails; malformed shapes degrade to the debug record alone.
pub fn extract_error_messages(err: Option<&Value>) -> Vec<FlowError> {
    let serialized = match err {
        Some(value) => value.to_string(),
        None => Value::Null.to_string(),
    };
    let mut errs = vec![FlowError::error(serialized)];

    let Some(data) = err
        .and_then(|e| e.get("response"))
        .and_then(|response| response.get("data"))
    else {
        return errs;
    };

    if let Some(error) = data.get("error") {
        let reason = error.get("reason").and_then(Value::as_str).unwrap_or_default();
        errs.push(FlowError::error(reason));
    } else if data.get("ui").is_some() {
        match FlowData::try_from(data.clone()) {
            Ok(flow) => return extract_ui_messages(&flow),
            Err(e) => {
                tracing::debug!("UI payload failed to deserialize: {e}");
                errs.push(FlowError::error(data.to_string()));
            }
        }
    } else {
        // Unknown error shape. Should not happen with a well-behaved Kratos,
        // so surface the raw payload for debugging.
        tracing::debug!("Unrecognized error payload: {data}");
        errs.push(FlowError::error(data.to_string()));
    }

    errs
}

/// Extracts the messages of a flow payload: flow-level `ui.messages` when
/// present, otherwise every node's messages concatenated in node order.
pub fn extract_ui_messages(data: &FlowData) -> Vec<FlowError> {
    if let Some(messages) = &data.ui.messages {
        return messages.clone();
    }
    if let Some(nodes) = &data.ui.nodes {
        return nodes
            .iter()
            .flat_map(|node| node.messages.iter().cloned())
            .collect();
    }
    Vec::new()
}
