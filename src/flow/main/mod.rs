mod csrf;
mod lookup;
mod messages;
mod oidc;
mod totp;

pub use csrf::extract_csrf_token;
pub use lookup::{LookupCodes, extract_lookup_codes};
pub use messages::{extract_error_messages, extract_ui_messages};
pub use oidc::{extract_oidc_link_providers, extract_oidc_providers, extract_oidc_unlink_providers};
pub use totp::{TotpData, TotpImage, extract_totp_data};
