use headsign_core::Result;
use http::header::{HeaderName, AUTHORIZATION, HOST};
use http::{HeaderMap, HeaderValue};
use serde::Serialize;

use crate::constants;

/// Headers produced by signing a request.
///
/// Serializes to a flat map keyed by `host`, `X-Amz-Content-Sha256`,
/// `X-Amz-Date` and `Authorization`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignedHeaders {
    #[serde(rename = "host")]
    host: String,
    #[serde(rename = "X-Amz-Content-Sha256")]
    content_sha256: String,
    #[serde(rename = "X-Amz-Date")]
    amz_date: String,
    #[serde(rename = "Authorization")]
    authorization: String,
}

impl SignedHeaders {
    pub(crate) fn new(
        host: String,
        content_sha256: String,
        amz_date: String,
        authorization: String,
    ) -> Self {
        Self {
            host,
            content_sha256,
            amz_date,
            authorization,
        }
    }

    /// Value of the `host` header.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Value of the `X-Amz-Content-Sha256` header.
    pub fn content_sha256(&self) -> &str {
        &self.content_sha256
    }

    /// Value of the `X-Amz-Date` header, e.g. `20220313T072004Z`.
    pub fn amz_date(&self) -> &str {
        &self.amz_date
    }

    /// Value of the `Authorization` header.
    pub fn authorization(&self) -> &str {
        &self.authorization
    }

    /// Iterate `(name, value)` pairs with header names in their sent casing.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            (constants::HOST, self.host.as_str()),
            (constants::X_AMZ_CONTENT_SHA_256, self.content_sha256.as_str()),
            (constants::X_AMZ_DATE, self.amz_date.as_str()),
            (constants::AUTHORIZATION, self.authorization.as_str()),
        ]
        .into_iter()
    }

    /// Convert into an [`HeaderMap`].
    ///
    /// `http` normalizes header names to lower case. The authorization value
    /// is marked sensitive.
    pub fn to_header_map(&self) -> Result<HeaderMap> {
        let mut authorization = HeaderValue::from_str(&self.authorization)?;
        authorization.set_sensitive(true);

        let mut map = HeaderMap::with_capacity(4);
        map.insert(HOST, HeaderValue::from_str(&self.host)?);
        map.insert(
            HeaderName::from_static("x-amz-content-sha256"),
            HeaderValue::from_str(&self.content_sha256)?,
        );
        map.insert(
            HeaderName::from_static("x-amz-date"),
            HeaderValue::from_str(&self.amz_date)?,
        );
        map.insert(AUTHORIZATION, authorization);
        Ok(map)
    }

    /// Insert the signed headers into an outgoing request.
    ///
    /// Existing headers with the same names are replaced.
    pub fn apply(&self, parts: &mut http::request::Parts) -> Result<()> {
        for (name, value) in self.to_header_map()? {
            if let Some(name) = name {
                parts.headers.insert(name, value);
            }
        }
        Ok(())
    }
}
