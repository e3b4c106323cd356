mod properties;
mod standard;

use headsign_aws_v4::{AwsConfig, RequestSigner, SignatureParameters};
use headsign_core::time::{parse_iso8601, DateTime};

pub const ACCESS_KEY: &str = "AKIDEXAMPLE";
pub const SECRET_KEY: &str = "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY";
pub const EMPTY_STRING_SHA256: &str =
    "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// Initialize test logging.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Fixed signing time: 2015-08-30T12:36:00Z
pub fn fixed_time() -> DateTime {
    parse_iso8601("20150830T123600Z").expect("time must be valid")
}

/// Signer pinned to [`fixed_time`].
pub fn fixed_signer() -> RequestSigner {
    RequestSigner::new().with_time(fixed_time())
}

/// Parameters for `GET https://example.com/foo?b=2&a=1` on execute-api.
pub fn example_params() -> SignatureParameters {
    SignatureParameters::new(
        "https://example.com/foo?b=2&a=1",
        AwsConfig::new("us-east-1", "execute-api", ACCESS_KEY, SECRET_KEY),
    )
}
