use serde::Deserialize;

use crate::{AwsConfig, SignatureConfig};

/// Input for a single signing call.
///
/// ```
/// use headsign_aws_v4::{AwsConfig, SignatureParameters};
///
/// let params = SignatureParameters::new(
///     "https://example.com/items",
///     AwsConfig::new("us-east-1", "execute-api", "AKIDEXAMPLE", "secret"),
/// )
/// .with_method("post")
/// .with_body(r#"{"id":1}"#);
///
/// assert_eq!(params.method.as_deref(), Some("post"));
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SignatureParameters {
    /// Absolute url of the request.
    pub target_url: String,
    /// Account used for signing.
    pub aws_config: AwsConfig,
    /// Overrides for the canonical request.
    pub signature_config: Option<SignatureConfig>,
    /// HTTP method, case-insensitive. Defaults to `GET`.
    pub method: Option<String>,
    /// Request body. Absent and empty bodies hash the same.
    pub body: Option<String>,
}

impl SignatureParameters {
    /// Create parameters for a `GET` request without body.
    pub fn new(target_url: &str, aws_config: AwsConfig) -> Self {
        Self {
            target_url: target_url.to_string(),
            aws_config,
            ..Default::default()
        }
    }

    /// Set the http method.
    pub fn with_method(mut self, method: &str) -> Self {
        self.method = Some(method.to_string());
        self
    }

    /// Set the request body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set the signature overrides.
    pub fn with_signature_config(mut self, cfg: SignatureConfig) -> Self {
        self.signature_config = Some(cfg);
        self
    }
}
