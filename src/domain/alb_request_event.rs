use std::collections::BTreeMap;

/// The envelope an application load balancer builds when its target group
/// forwards an HTTP request to a function.
///
/// Header names are lower-cased and a repeated header keeps its last value.
/// Bodies that are not valid UTF-8 travel base64 encoded with
/// `isBase64Encoded` set.
#[derive(serde::Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlbRequestEvent {
    request_context: RequestContext,
    http_method: String,
    path: String,
    query_string_parameters: BTreeMap<String, String>,
    headers: BTreeMap<String, String>,
    body: String,
    is_base64_encoded: bool,
}

#[derive(serde::Serialize, Debug, Clone, PartialEq)]
struct RequestContext {
    elb: ElbContext,
}

#[derive(serde::Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
struct ElbContext {
    target_group_arn: String,
}

impl AlbRequestEvent {
    pub fn new(
        target_group_arn: &str,
        http_method: &str,
        path: &str,
        query_string_parameters: impl IntoIterator<Item = (String, String)>,
        headers: impl IntoIterator<Item = (String, String)>,
        body: &[u8],
    ) -> Self {
        let headers = headers
            .into_iter()
            .map(|(name, value)| (name.to_lowercase(), value))
            .collect();
        let (body, is_base64_encoded) = match std::str::from_utf8(body) {
            Ok(text) => (text.to_string(), false),
            Err(_) => (
                base64::Engine::encode(&base64::engine::general_purpose::STANDARD, body),
                true,
            ),
        };

        Self {
            request_context: RequestContext {
                elb: ElbContext {
                    target_group_arn: target_group_arn.to_string(),
                },
            },
            http_method: http_method.to_string(),
            path: path.to_string(),
            query_string_parameters: query_string_parameters.into_iter().collect(),
            headers,
            body,
            is_base64_encoded,
        }
    }

    pub fn http_method(&self) -> &str {
        &self.http_method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn is_base64_encoded(&self) -> bool {
        self.is_base64_encoded
    }
}
