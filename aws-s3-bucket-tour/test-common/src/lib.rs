/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_runtime_api::client::orchestrator::HttpResponse;
use aws_smithy_runtime_api::http::StatusCode;
use aws_smithy_types::body::SdkBody;

#[doc(hidden)]
pub use aws_smithy_http_client;
#[doc(hidden)]
pub use aws_smithy_mocks_experimental;
#[doc(hidden)]
pub use http;

/// Build a mock S3 client whose requests reach a stubbed HTTP client.
///
/// Rules using `then_http_response` only take effect once a request has been transmitted,
/// so they need this variant rather than a plain `mock_client!`.
#[macro_export]
macro_rules! mock_client_with_stubbed_http_client {
    ($aws_crate: ident, $rules: expr) => {
        $crate::mock_client_with_stubbed_http_client!(
            $aws_crate,
            $crate::aws_smithy_mocks_experimental::RuleMode::Sequential,
            $rules
        )
    };
    ($aws_crate: ident, $rule_mode: expr, $rules: expr) => {{
        $crate::aws_smithy_mocks_experimental::mock_client!(
            $aws_crate,
            $rule_mode,
            $rules,
            |conf| {
                conf.http_client($crate::aws_smithy_http_client::test_util::infallible_client_fn(
                    |_req| $crate::http::Response::builder().status(200).body("").unwrap(),
                ))
            }
        )
    }};
}

/// An S3 REST-XML error response with the given status and error code.
pub fn s3_error_response(status: u16, code: &str) -> HttpResponse {
    let body = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <Error><Code>{code}</Code><Message>{code}</Message><RequestId>4442587FB7D0A2F9</RequestId></Error>"
    );
    HttpResponse::new(StatusCode::try_from(status).unwrap(), SdkBody::from(body))
}
