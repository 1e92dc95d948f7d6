//! ory_flow_extract - Extraction helpers for Ory Kratos self-service flow payloads
//!
//! This crate post-processes the UI node trees Kratos returns for its
//! self-service flows (login, settings, verification) and pulls out the values
//! an application renders or resubmits: error messages, the CSRF token, OIDC
//! provider lists, TOTP enrollment data, and lookup recovery codes.
//!
//! The flows themselves, network transport and session management all live in
//! the Kratos client SDK and the surrounding application; this crate only
//! reads the responses.

mod cookies;
mod flow;

#[cfg(test)]
mod test_utils;

pub use cookies::{CookieSource, RequestCookies, StaticCookies};

pub use flow::{
    FlowData, FlowError, NodeAttributes, UiContainer, UiDataError, UiNode, UiText, UiTextContext,
};

pub use flow::{
    LookupCodes, TotpData, TotpImage, extract_csrf_token, extract_error_messages,
    extract_lookup_codes, extract_oidc_link_providers, extract_oidc_providers,
    extract_oidc_unlink_providers, extract_totp_data, extract_ui_messages,
};
