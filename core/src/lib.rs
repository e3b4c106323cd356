//! Core components for computing request-signing headers.
//!
//! This crate provides the foundational, service-agnostic pieces used by the
//! headsign signers.
//!
//! ## Overview
//!
//! - **Context**: A container that holds the environment access and the success
//!   notifier used while signing
//! - **SigningRequest**: The method, host, path and query extracted from a target URL
//! - **Validation**: A collector that gathers every input problem before failing
//!
//! ## Example
//!
//! ```
//! use headsign_core::{Context, LogNotify, SigningRequest};
//!
//! let ctx = Context::new().with_notify(LogNotify);
//!
//! let req = SigningRequest::build(Some("post"), "https://example.com/foo?b=2&a=1")?;
//! assert_eq!(req.method, http::Method::POST);
//! assert_eq!(req.host, "example.com");
//! assert_eq!(req.path, "/foo");
//! assert_eq!(req.query, "b=2&a=1");
//! # ctx.notify("done");
//! # Ok::<(), headsign_core::Error>(())
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time formatting utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{Context, Env, LogNotify, NoopEnv, NoopNotify, Notify, OsEnv, StaticEnv};
mod error;
pub use error::{Error, ErrorKind, Result};
mod request;
pub use request::{parse_method, url_field, SigningRequest, UrlField};
mod validate;
pub use validate::{Validation, Violation};
