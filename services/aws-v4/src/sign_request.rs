use headsign_core::hash::{hex_hmac_sha256, hex_sha256, hmac_sha256, EMPTY_STRING_SHA256};
use headsign_core::time::{format_date, format_iso8601, now, DateTime};
use headsign_core::{Context, Result, SigningRequest};
use log::debug;

use crate::constants::{AWS4_REQUEST, SIGNED_MESSAGE};
use crate::validate::validate;
use crate::{ResolvedSignatureConfig, SignatureParameters, SignedHeaders};

/// RequestSigner that computes AWS SigV4 headers.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
///
/// The canonical request keeps a blank line between the canonical headers
/// and the signed headers. Receivers must compute it the same way.
#[derive(Debug, Default)]
pub struct RequestSigner {
    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new signer that signs with the current time.
    pub fn new() -> Self {
        Self::default()
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Sign the given parameters and return the headers to send.
    ///
    /// Input is validated first. On failure the returned error carries every
    /// problem found and nothing is signed. A target url that does not parse
    /// fails with [`ErrorKind::UrlInvalid`](headsign_core::ErrorKind::UrlInvalid).
    pub fn sign_headers(
        &self,
        ctx: &Context,
        params: &SignatureParameters,
    ) -> Result<SignedHeaders> {
        validate(params).into_result()?;

        let req = SigningRequest::build(params.method.as_deref(), &params.target_url)?;
        let cfg = params
            .signature_config
            .clone()
            .unwrap_or_default()
            .resolve(&req.host);
        let now = self.time.unwrap_or_else(now);

        let headers = sign(&req, &cfg, params, now);
        ctx.notify(SIGNED_MESSAGE);
        Ok(headers)
    }
}

/// Sign headers with a default [`Context`] and the current time.
///
/// ```
/// use headsign_aws_v4::{sign_headers, AwsConfig, SignatureParameters};
///
/// let params = SignatureParameters::new(
///     "https://example.com/foo?b=2&a=1",
///     AwsConfig::new("us-east-1", "execute-api", "AKIDEXAMPLE", "secret"),
/// );
/// let headers = sign_headers(&params)?;
///
/// assert_eq!(headers.host(), "example.com");
/// assert!(headers.authorization().starts_with("AWS4-HMAC-SHA256 Credential="));
/// # Ok::<(), headsign_core::Error>(())
/// ```
pub fn sign_headers(params: &SignatureParameters) -> Result<SignedHeaders> {
    RequestSigner::new().sign_headers(&Context::default(), params)
}

fn sign(
    req: &SigningRequest,
    cfg: &ResolvedSignatureConfig,
    params: &SignatureParameters,
    now: DateTime,
) -> SignedHeaders {
    let aws = &params.aws_config;

    let payload_hash = payload_hash(params.body.as_deref());
    let creq = canonical_request_string(req, cfg, &payload_hash);
    debug!("calculated canonical request: {creq}");
    let encoded_req = hex_sha256(creq.as_bytes());

    let amz_date = format_iso8601(now);
    // Scope: "20220313/<region>/<service>/aws4_request"
    let scope = format!(
        "{}/{}/{}/{}",
        format_date(now),
        aws.region,
        aws.service,
        cfg.credential_scope
    );
    debug!("calculated scope: {scope}");

    // StringToSign:
    //
    // AWS4-HMAC-SHA256
    // 20220313T072004Z
    // 20220313/<region>/<service>/aws4_request
    // <hashed_canonical_request>
    let string_to_sign = format!("{}\n{}\n{}\n{}", cfg.algorithm, amz_date, scope, encoded_req);
    debug!("calculated string to sign: {string_to_sign}");

    let signing_key = generate_signing_key(&aws.secret_key, now, &aws.region, &aws.service);
    let signature = hex_hmac_sha256(&signing_key, string_to_sign.as_bytes());

    let authorization = format!(
        "{} Credential={}/{}, SignedHeaders={}, Signature={}",
        cfg.algorithm, aws.access_key, scope, cfg.signed_headers, signature
    );

    SignedHeaders::new(req.host.clone(), payload_hash, amz_date, authorization)
}

fn payload_hash(body: Option<&str>) -> String {
    match body {
        Some(body) if !body.is_empty() => hex_sha256(body.as_bytes()),
        _ => EMPTY_STRING_SHA256.to_string(),
    }
}

fn canonical_request_string(
    req: &SigningRequest,
    cfg: &ResolvedSignatureConfig,
    payload_hash: &str,
) -> String {
    // canonical_headers ends with '\n' already, so joining adds a blank line
    // before the signed headers.
    [
        req.method.as_str(),
        req.path.as_str(),
        req.query.as_str(),
        cfg.canonical_headers.as_str(),
        cfg.signed_headers.as_str(),
        payload_hash,
    ]
    .join("\n")
}

fn generate_signing_key(secret: &str, time: DateTime, region: &str, service: &str) -> Vec<u8> {
    // Sign secret
    let secret = format!("AWS4{secret}");
    // Sign date
    let sign_date = hmac_sha256(secret.as_bytes(), format_date(time).as_bytes());
    // Sign region
    let sign_region = hmac_sha256(sign_date.as_slice(), region.as_bytes());
    // Sign service
    let sign_service = hmac_sha256(sign_region.as_slice(), service.as_bytes());
    // Sign request
    hmac_sha256(sign_service.as_slice(), AWS4_REQUEST.as_bytes())
}
