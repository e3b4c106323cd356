//! AWS SigV4 header signer
//!
//! Computes the `host`, `X-Amz-Content-Sha256`, `X-Amz-Date` and
//! `Authorization` headers for an outgoing request.
//!
//! ## Example
//!
//! ```
//! use headsign_aws_v4::{AwsConfig, RequestSigner, SignatureParameters};
//! use headsign_core::{Context, LogNotify, OsEnv};
//!
//! let ctx = Context::new().with_env(OsEnv).with_notify(LogNotify);
//!
//! // Blank fields are filled from AWS_REGION, AWS_ACCESS_KEY_ID, ... if set.
//! let cfg = AwsConfig::new("us-east-1", "execute-api", "AKIDEXAMPLE", "secret").from_env(&ctx);
//!
//! let params = SignatureParameters::new("https://example.com/items", cfg)
//!     .with_method("post")
//!     .with_body(r#"{"id":1}"#);
//!
//! let headers = RequestSigner::new().sign_headers(&ctx, &params)?;
//! for (name, value) in headers.iter() {
//!     println!("{name}: {value}");
//! }
//! # Ok::<(), headsign_core::Error>(())
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod constants;

mod config;
pub use config::{AwsConfig, ResolvedSignatureConfig, SignatureConfig};
mod headers;
pub use headers::SignedHeaders;
mod params;
pub use params::SignatureParameters;
mod sign_request;
pub use sign_request::{sign_headers, RequestSigner};
mod validate;
pub use validate::validate;
