use headsign_core::utils::non_blank;
use headsign_core::{parse_method, Validation, Violation};

use crate::SignatureParameters;

/// Check every required field of the parameters.
///
/// All problems are collected, in field order, before the caller decides to fail.
pub fn validate(params: &SignatureParameters) -> Validation {
    let cfg = &params.aws_config;
    let mut v = Validation::new();

    v.require_non_blank(
        "targetUrl",
        Some(params.target_url.as_str()),
        "Missing \"target\" field in the request parameter",
    );
    v.require_non_blank(
        "awsConfig.region",
        Some(cfg.region.as_str()),
        "\"region\" field is empty or null in the \"awsConfig.region\" object",
    );
    v.require_non_blank(
        "awsConfig.accessKey",
        Some(cfg.access_key.as_str()),
        "\"accessKey\" field is empty or null in the \"awsConfig.accessKey\" object",
    );
    v.require_non_blank(
        "awsConfig.secretKey",
        Some(cfg.secret_key.as_str()),
        "\"secretKey\" field is empty or null in the \"awsConfig.secretKey\" object",
    );
    v.require_non_blank(
        "awsConfig.service",
        Some(cfg.service.as_str()),
        "\"service\" field is empty or null in the \"awsConfig.service\" object",
    );

    // A blank method means GET.
    if let Some(method) = non_blank(params.method.as_deref()) {
        if parse_method(method).is_none() {
            v.push(Violation::new(
                "method",
                format!("\"method\" field should be a standard http method. \"{method}\" given."),
            ));
        }
    }

    v
}
