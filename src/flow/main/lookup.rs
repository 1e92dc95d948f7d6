use serde::Serialize;

use crate::flow::types::FlowData;

/// Lookup-secret (backup recovery code) data from a settings flow.
///
/// `codes` is empty unless Kratos is currently revealing the codes; the two
/// booleans report which action buttons the flow offers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LookupCodes {
    pub codes: Vec<String>,
    pub regenerate_button: bool,
    pub disable_button: bool,
}

/// Extracts recovery codes and action-button presence from the
/// `lookup_secret` group nodes of a settings flow.
pub fn extract_lookup_codes(data: &FlowData) -> LookupCodes {
    let mut lookup = LookupCodes::default();

    for node in data.ui.nodes.iter().flatten() {
        if node.group != "lookup_secret" {
            continue;
        }
        if node.attributes.id.as_deref() == Some("lookup_secret_codes") {
            // The codes arrive as individual text entries under
            // text.context.secrets, kept separate so callers can format them.
            if let Some(context) = node.attributes.text.as_ref().and_then(|t| t.context.as_ref()) {
                lookup
                    .codes
                    .extend(context.secrets.iter().map(|secret| secret.text.clone()));
            }
        }
        match node.attributes.name.as_deref() {
            Some("lookup_secret_regenerate") => lookup.regenerate_button = true,
            Some("lookup_secret_disable") => lookup.disable_button = true,
            _ => {}
        }
    }

    lookup
}
