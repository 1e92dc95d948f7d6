use serde_json::Value;

use crate::flow::types::FlowData;

/// Display order for federated-login buttons. Providers Kratos offers that are
/// not listed here sort after all listed ones, keeping their source order.
const PREFERRED_PROVIDER_ORDER: [&str; 6] =
    ["github", "discord", "google", "apple", "microsoft", "gitlab"];

fn provider_rank(provider: &str) -> usize {
    PREFERRED_PROVIDER_ORDER
        .iter()
        .position(|p| *p == provider)
        .unwrap_or(usize::MAX)
}

fn collect_oidc_values(data: &FlowData, attribute_name: &str) -> Vec<String> {
    let mut providers: Vec<String> = data
        .ui
        .nodes
        .iter()
        .flatten()
        .filter(|node| {
            node.group == "oidc" && node.attributes.name.as_deref() == Some(attribute_name)
        })
        .filter_map(|node| {
            node.attributes
                .value
                .as_ref()
                .and_then(Value::as_str)
                .map(str::to_owned)
        })
        .collect();
    // sort_by_key is stable, so unranked providers keep their relative order
    providers.sort_by_key(|provider| provider_rank(provider));
    providers
}

/// OIDC providers offered for sign-in (`provider` nodes of a login flow).
pub fn extract_oidc_providers(data: &FlowData) -> Vec<String> {
    collect_oidc_values(data, "provider")
}

/// OIDC providers the account can still link (`link` nodes of a settings flow).
pub fn extract_oidc_link_providers(data: &FlowData) -> Vec<String> {
    collect_oidc_values(data, "link")
}

/// OIDC providers currently linked and offered for unlinking (`unlink` nodes
/// of a settings flow).
pub fn extract_oidc_unlink_providers(data: &FlowData) -> Vec<String> {
    collect_oidc_values(data, "unlink")
}
