use serde::Serialize;

use crate::flow::types::FlowData;

/// QR image node of a TOTP enrollment flow. `src` is a data URI with the
/// base64-encoded image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotpImage {
    pub src: String,
    pub width: i64,
    pub height: i64,
}

/// TOTP enrollment data from a settings flow. Either field is `None` when its
/// node is absent, e.g. once TOTP is already configured.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotpData {
    pub image: Option<TotpImage>,
    pub secret: Option<String>,
}

/// Extracts the TOTP enrollment QR image and raw secret from the `totp` group
/// nodes of a settings flow.
pub fn extract_totp_data(data: &FlowData) -> TotpData {
    let mut image = None;
    let mut secret = None;

    for node in data.ui.nodes.iter().flatten() {
        if node.group != "totp" {
            continue;
        }
        match node.attributes.id.as_deref() {
            Some("totp_qr") => {
                image = Some(TotpImage {
                    src: node.attributes.src.clone().unwrap_or_default(),
                    width: node.attributes.width.unwrap_or_default(),
                    height: node.attributes.height.unwrap_or_default(),
                });
            }
            Some("totp_secret_key") => {
                secret = node.attributes.text.as_ref().map(|text| text.text.clone());
            }
            _ => {}
        }
    }

    TotpData { image, secret }
}
