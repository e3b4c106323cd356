use super::{example_params, fixed_signer, init_logger, ACCESS_KEY, EMPTY_STRING_SHA256, SECRET_KEY};
use anyhow::Result;
use headsign_aws_v4::{AwsConfig, SignatureConfig, SignatureParameters};
use headsign_core::{Context, StaticEnv};
use log::debug;
use pretty_assertions::assert_eq;
use std::collections::HashMap;

#[test]
fn test_get_request() -> Result<()> {
    init_logger();

    let headers = fixed_signer().sign_headers(&Context::new(), &example_params())?;
    debug!("signed headers: {headers:?}");

    let got: Vec<_> = headers.iter().collect();
    assert_eq!(
        got,
        vec![
            ("host", "example.com"),
            ("X-Amz-Content-Sha256", EMPTY_STRING_SHA256),
            ("X-Amz-Date", "20150830T123600Z"),
            (
                "Authorization",
                "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/execute-api/aws4_request, SignedHeaders=host, Signature=92a9abe46bbbd390288b9925a5c777b696b362ad50a7e481b31609674039dd6d"
            ),
        ]
    );
    Ok(())
}

#[test]
fn test_post_request_with_custom_headers() -> Result<()> {
    init_logger();

    let params = SignatureParameters::new(
        "https://api.example.com/v1/items",
        AwsConfig::new("eu-west-2", "execute-api", ACCESS_KEY, SECRET_KEY),
    )
    .with_method("POST")
    .with_body(r#"{"id":1}"#)
    .with_signature_config(SignatureConfig {
        signed_headers: Some("host;x-amz-target".to_string()),
        canonical_headers: Some("host:api.example.com\nx-amz-target:Items.Put".to_string()),
        ..Default::default()
    });

    let headers = fixed_signer().sign_headers(&Context::new(), &params)?;

    assert_eq!(
        headers.content_sha256(),
        "037c9214eef74cc3887f3a4f085b4e17d76280dafd273b0ee160c09c4ba1cfd4"
    );
    assert_eq!(
        headers.authorization(),
        "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/eu-west-2/execute-api/aws4_request, SignedHeaders=host;x-amz-target, Signature=485653208285e7edc361dc1349090015329f972cff7d87eb881e9362fdebc579"
    );
    Ok(())
}

#[test]
fn test_params_from_json() -> Result<()> {
    let params: SignatureParameters = serde_json::from_str(
        r#"{
            "targetUrl": "https://example.com/foo?b=2&a=1",
            "awsConfig": {
                "region": "us-east-1",
                "service": "execute-api",
                "accessKey": "AKIDEXAMPLE",
                "secretKey": "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY"
            }
        }"#,
    )?;

    let from_json = fixed_signer().sign_headers(&Context::new(), &params)?;
    let from_code = fixed_signer().sign_headers(&Context::new(), &example_params())?;
    assert_eq!(from_json, from_code);

    let out = serde_json::to_value(&from_json)?;
    assert_eq!(out["X-Amz-Date"], "20150830T123600Z");
    Ok(())
}

#[test]
fn test_config_from_env() -> Result<()> {
    let ctx = Context::new().with_env(StaticEnv {
        envs: HashMap::from([
            ("AWS_REGION".to_string(), "us-east-1".to_string()),
            ("AWS_ACCESS_KEY_ID".to_string(), ACCESS_KEY.to_string()),
            ("AWS_SECRET_ACCESS_KEY".to_string(), SECRET_KEY.to_string()),
        ]),
    });

    let cfg = AwsConfig {
        service: "execute-api".to_string(),
        ..Default::default()
    }
    .from_env(&ctx);
    let params = SignatureParameters::new("https://example.com/foo?b=2&a=1", cfg);

    let headers = fixed_signer().sign_headers(&ctx, &params)?;
    let expected = fixed_signer().sign_headers(&Context::new(), &example_params())?;
    assert_eq!(headers, expected);
    Ok(())
}

#[test]
fn test_apply_to_http_request() -> Result<()> {
    let params = example_params();
    let headers = fixed_signer().sign_headers(&Context::new(), &params)?;

    let req = http::Request::builder()
        .method(http::Method::GET)
        .uri(&params.target_url)
        .body(())?;
    let (mut parts, body) = req.into_parts();
    headers.apply(&mut parts)?;
    let req = http::Request::from_parts(parts, body);

    assert_eq!(req.headers()["host"], "example.com");
    assert_eq!(req.headers()["x-amz-content-sha256"], EMPTY_STRING_SHA256);
    assert_eq!(req.headers()["x-amz-date"], "20150830T123600Z");
    assert_eq!(req.headers()["authorization"], headers.authorization());
    Ok(())
}
