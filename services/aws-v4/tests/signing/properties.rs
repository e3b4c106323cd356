use super::{example_params, fixed_signer, EMPTY_STRING_SHA256};
use anyhow::Result;
use headsign_aws_v4::{sign_headers, SignatureConfig};
use headsign_core::Context;
use regex::Regex;
use sha2::{Digest, Sha256};
use test_case::test_case;

#[test]
fn test_example_header_formats() -> Result<()> {
    let headers = sign_headers(&example_params())?;

    assert_eq!(headers.host(), "example.com");
    assert_eq!(headers.content_sha256(), EMPTY_STRING_SHA256);
    assert!(Regex::new(r"^\d{8}T\d{6}Z$")?.is_match(headers.amz_date()));

    let authorization = Regex::new(
        r"^AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/(\d{8})/us-east-1/execute-api/aws4_request, SignedHeaders=host, Signature=[0-9a-f]{64}$",
    )?;
    let captures = authorization
        .captures(headers.authorization())
        .expect("authorization must match");
    assert_eq!(&captures[1], &headers.amz_date()[..8]);
    Ok(())
}

#[test_case(None; "default algorithm")]
#[test_case(Some("AWS4-ECDSA-P256-SHA256"); "custom algorithm")]
fn test_authorization_starts_with_algorithm(algorithm: Option<&str>) -> Result<()> {
    let params = example_params().with_signature_config(SignatureConfig {
        algorithm: algorithm.map(str::to_string),
        ..Default::default()
    });

    let headers = sign_headers(&params)?;
    let prefix = format!("{} Credential=", algorithm.unwrap_or("AWS4-HMAC-SHA256"));
    assert!(headers.authorization().starts_with(&prefix));
    Ok(())
}

#[test]
fn test_deterministic_for_same_second() -> Result<()> {
    let ctx = Context::new();

    let first = fixed_signer().sign_headers(&ctx, &example_params())?;
    let second = fixed_signer().sign_headers(&ctx, &example_params())?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_absent_and_empty_body_hash_the_same() -> Result<()> {
    let ctx = Context::new();

    let absent = fixed_signer().sign_headers(&ctx, &example_params())?;
    let empty = fixed_signer().sign_headers(&ctx, &example_params().with_body(""))?;

    assert_eq!(absent.content_sha256(), EMPTY_STRING_SHA256);
    assert_eq!(empty.content_sha256(), EMPTY_STRING_SHA256);
    assert_eq!(absent, empty);
    Ok(())
}

#[test_case("Hello, World!"; "text")]
#[test_case(r#"{"name":"héllo"}"#; "utf8 json")]
#[test_case(" "; "single space")]
fn test_body_hash_is_sha256_of_body(body: &str) -> Result<()> {
    let headers = fixed_signer().sign_headers(
        &Context::new(),
        &example_params().with_method("put").with_body(body),
    )?;

    assert_eq!(
        headers.content_sha256(),
        hex::encode(Sha256::digest(body.as_bytes()))
    );
    Ok(())
}

#[test]
fn test_service_changes_signature_only() -> Result<()> {
    let ctx = Context::new();
    let api = fixed_signer().sign_headers(&ctx, &example_params())?;

    let mut params = example_params();
    params.aws_config.service = "s3".to_string();
    let s3 = fixed_signer().sign_headers(&ctx, &params)?;

    assert_eq!(api.content_sha256(), s3.content_sha256());
    assert_eq!(api.host(), s3.host());
    assert_eq!(api.amz_date(), s3.amz_date());

    let signature = |v: &str| v.rsplit("Signature=").next().unwrap_or_default().to_string();
    assert_ne!(
        signature(api.authorization()),
        signature(s3.authorization())
    );
    Ok(())
}

#[test]
fn test_query_is_not_sorted() -> Result<()> {
    let ctx = Context::new();
    let unsorted = fixed_signer().sign_headers(&ctx, &example_params())?;

    let mut params = example_params();
    params.target_url = "https://example.com/foo?a=1&b=2".to_string();
    let sorted = fixed_signer().sign_headers(&ctx, &params)?;

    assert_ne!(unsorted.authorization(), sorted.authorization());
    Ok(())
}
