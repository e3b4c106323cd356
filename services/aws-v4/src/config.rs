use std::fmt::{Debug, Formatter};

use headsign_core::utils::{is_blank, Redact};
use headsign_core::Context;
use log::debug;
use serde::Deserialize;

use crate::constants::*;

/// Config for the aws account that signs the request.
///
/// Field names follow `region`, `service`, `accessKey` and `secretKey` when
/// deserialized.
#[derive(Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AwsConfig {
    /// AWS region, e.g. `eu-west-2`.
    ///
    /// Filled from `AWS_REGION` or `AWS_DEFAULT_REGION` by [`AwsConfig::from_env`].
    pub region: String,
    /// AWS service name, e.g. `execute-api`.
    ///
    /// Filled from `AWS_SERVICE` by [`AwsConfig::from_env`].
    pub service: String,
    /// Access key id.
    ///
    /// Filled from `AWS_ACCESS_KEY_ID` by [`AwsConfig::from_env`].
    pub access_key: String,
    /// Secret access key.
    ///
    /// Filled from `AWS_SECRET_ACCESS_KEY` by [`AwsConfig::from_env`].
    pub secret_key: String,
}

impl Debug for AwsConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsConfig")
            .field("region", &self.region)
            .field("service", &self.service)
            .field("access_key", &Redact::from(&self.access_key))
            .field("secret_key", &Redact::from(&self.secret_key))
            .finish()
    }
}

impl AwsConfig {
    /// Create a new config from explicit values.
    pub fn new(region: &str, service: &str, access_key: &str, secret_key: &str) -> Self {
        Self {
            region: region.to_string(),
            service: service.to_string(),
            access_key: access_key.to_string(),
            secret_key: secret_key.to_string(),
        }
    }

    /// Fill blank fields from the context's environment.
    ///
    /// Fields that already hold a non-blank value are kept.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        fill(&mut self.region, ctx, &[AWS_REGION, AWS_DEFAULT_REGION]);
        fill(&mut self.service, ctx, &[AWS_SERVICE]);
        fill(&mut self.access_key, ctx, &[AWS_ACCESS_KEY_ID]);
        fill(&mut self.secret_key, ctx, &[AWS_SECRET_ACCESS_KEY]);

        debug!("aws config loaded from env: {:?}", self);
        self
    }
}

fn fill(field: &mut String, ctx: &Context, keys: &[&str]) {
    if !is_blank(Some(field.as_str())) {
        return;
    }
    if let Some(v) = keys
        .iter()
        .filter_map(|k| ctx.env_var(k))
        .find(|v| !is_blank(Some(v.as_str())))
    {
        *field = v;
    }
}

/// Optional overrides for building the canonical request.
///
/// Empty values are treated as absent. Any other value, whitespace
/// included, is used as given.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SignatureConfig {
    /// Signed header names, `;` separated. Defaults to `host`.
    pub signed_headers: Option<String>,
    /// Canonical headers block. Defaults to `host:{host}`.
    ///
    /// One trailing newline is appended to the given value.
    pub canonical_headers: Option<String>,
    /// Algorithm name. Defaults to `AWS4-HMAC-SHA256`.
    pub algorithm: Option<String>,
    /// Last segment of the credential scope. Defaults to `aws4_request`.
    pub credential_scope: Option<String>,
}

impl SignatureConfig {
    /// Apply defaults for the given host.
    pub fn resolve(&self, host: &str) -> ResolvedSignatureConfig {
        let canonical_headers = match supplied(&self.canonical_headers) {
            Some(v) => format!("{v}\n"),
            None => format!("host:{host}\n"),
        };

        ResolvedSignatureConfig {
            signed_headers: or_default(&self.signed_headers, DEFAULT_SIGNED_HEADERS),
            canonical_headers,
            algorithm: or_default(&self.algorithm, DEFAULT_ALGORITHM),
            credential_scope: or_default(&self.credential_scope, AWS4_REQUEST),
        }
    }
}

fn supplied(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|v| !v.is_empty())
}

fn or_default(v: &Option<String>, default: &str) -> String {
    supplied(v).unwrap_or(default).to_string()
}

/// [`SignatureConfig`] with every default applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSignatureConfig {
    /// Signed header names.
    pub signed_headers: String,
    /// Canonical headers, always newline terminated.
    pub canonical_headers: String,
    /// Algorithm name.
    pub algorithm: String,
    /// Last segment of the credential scope.
    pub credential_scope: String,
}
