mod errors;
mod main;
mod types;

pub use errors::UiDataError;
pub use main::{
    LookupCodes, TotpData, TotpImage, extract_csrf_token, extract_error_messages,
    extract_lookup_codes, extract_oidc_link_providers, extract_oidc_providers,
    extract_oidc_unlink_providers, extract_totp_data, extract_ui_messages,
};
pub use types::{FlowData, FlowError, NodeAttributes, UiContainer, UiNode, UiText, UiTextContext};
