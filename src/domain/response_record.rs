use std::collections::BTreeMap;

pub const WEB_BACKEND_BODY: &str = "<h1>Response from lambda web backend</h1>";

/// The object a load balancer expects back from a function target.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResponseRecord {
    status_code: u16,
    status_description: String,
    is_base64_encoded: bool,
    headers: BTreeMap<String, String>,
    body: String,
}

impl ResponseRecord {
    /// The static page served for every request routed to the web backend.
    pub fn web_backend() -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "text/html".to_string());

        Self {
            status_code: 200,
            status_description: "200 OK".to_string(),
            is_base64_encoded: false,
            headers,
            body: WEB_BACKEND_BODY.to_string(),
        }
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn status_description(&self) -> &str {
        &self.status_description
    }

    pub fn is_base64_encoded(&self) -> bool {
        self.is_base64_encoded
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Raw body bytes, undoing the base64 transfer encoding when it is flagged.
    pub fn decoded_body(&self) -> Result<Vec<u8>, base64::DecodeError> {
        if self.is_base64_encoded {
            base64::Engine::decode(&base64::engine::general_purpose::STANDARD, &self.body)
        } else {
            Ok(self.body.clone().into_bytes())
        }
    }
}
