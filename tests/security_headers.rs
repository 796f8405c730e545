//! End-to-end tests of the security header middleware on axum routers.

use axum::http::StatusCode;
use security_headers::config::{parse_config, AppConfig, HeadersConfig};
use security_headers::{HttpServer, PolicyBuilder, RouterExt, SecurityHeadersLayer};

mod common;

use common::{get_response, header_values, router_with_headers};

#[tokio::test]
async fn test_configuration_scenario_on_empty_response() {
    let config = HeadersConfig::from_pairs([
        ("Security:Headers:NoSniff", "Enabled"),
        ("Security:Headers:FrameOptions", "SAMEORIGIN"),
        ("Security:Headers:XSS", "1; mode=block"),
        ("Security:Headers:PoweredBy", "Disabled"),
    ]);
    let router = router_with_headers(&[]).security_headers(&config);

    let (status, headers, _) = get_response(router, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(header_values(&headers, "X-Content-Type-Options"), vec!["nosniff"]);
    assert_eq!(header_values(&headers, "X-Frame-Deny"), vec!["SAMEORIGIN"]);
    assert_eq!(header_values(&headers, "X-XSS-Protection"), vec!["1; mode=block"]);
    assert!(!headers.contains_key("X-Powered-By"));
}

#[tokio::test]
async fn test_existing_headers_are_kept() {
    let router = router_with_headers(&[
        ("x-frame-deny", "DENY"),
        ("strict-transport-security", "max-age=10"),
    ])
    .security_headers(
        PolicyBuilder::new()
            .add_frame_deny_options_for_same_origin()
            .add_max_age_with_sub_domain(3600)
            .add_no_sniff(),
    );

    let (_, headers, _) = get_response(router, "/").await;

    assert_eq!(header_values(&headers, "x-frame-deny"), vec!["DENY"]);
    assert_eq!(header_values(&headers, "strict-transport-security"), vec!["max-age=10"]);
    assert_eq!(header_values(&headers, "x-content-type-options"), vec!["nosniff"]);
}

#[tokio::test]
async fn test_removed_headers_absent_regardless_of_presence() {
    let builder = PolicyBuilder::new()
        .remove_server()
        .remove_powered_by()
        .remove_custom_header("X-AspNet-Version");

    let router = router_with_headers(&[
        ("server", "Kestrel"),
        ("x-powered-by", "ASP.NET"),
        ("x-powered-by", "PHP"),
    ])
    .security_headers(SecurityHeadersLayer::from_builder(builder.clone()));
    let (_, headers, body) = get_response(router, "/").await;
    assert!(!headers.contains_key("server"));
    assert!(!headers.contains_key("x-powered-by"));
    assert!(!headers.contains_key("x-aspnet-version"));
    assert_eq!(body, "ok");

    let router = router_with_headers(&[]).security_headers(builder);
    let (_, headers, _) = get_response(router, "/").await;
    assert!(!headers.contains_key("server"));
}

#[tokio::test]
async fn test_shared_policy_across_routers() {
    let policy = PolicyBuilder::new().add_max_age_with_sub_domain(3600).build();

    for _ in 0..3 {
        let router = router_with_headers(&[]).security_headers(policy.clone());
        let (_, headers, _) = get_response(router, "/").await;
        assert_eq!(
            header_values(&headers, "Strict-Transport-Security"),
            vec!["max-age=3600; includeSubDomains"]
        );
    }
}

#[tokio::test]
async fn test_custom_multi_value_header() {
    let router = router_with_headers(&[]).security_headers(
        PolicyBuilder::new()
            .add_custom_security_header("X-Custom-Policy", "one")
            .add_custom_security_header("X-Custom-Policy", "two")
            .add_custom_security_header("X-Custom-Policy", "one"),
    );

    let (_, headers, _) = get_response(router, "/").await;
    assert_eq!(header_values(&headers, "x-custom-policy"), vec!["one"]);
}

#[tokio::test]
async fn test_allow_from_frame_option_from_toml() {
    let config = parse_config(
        r#"
[Security.Headers]
FrameOptions = "https://example.com"
XSS = "0"

[Security.Headers.Custom.Extra]
Referrer-Policy = "no-referrer"
"#,
    )
    .unwrap();
    let router = router_with_headers(&[]).security_headers(&config.security.headers);

    let (_, headers, _) = get_response(router, "/").await;
    assert_eq!(
        header_values(&headers, "X-Frame-Deny"),
        vec!["Allow-From https://example.com"]
    );
    assert_eq!(header_values(&headers, "X-XSS-Protection"), vec!["0"]);
    assert_eq!(header_values(&headers, "Referrer-Policy"), vec!["no-referrer"]);
}

#[tokio::test]
async fn test_sample_server_probe() {
    let mut config = AppConfig::default();
    config.security.headers = HeadersConfig::from_pairs([
        ("Security:Headers:NoSniff", "Enabled"),
        ("Security:Headers:Server", "Disabled"),
    ]);
    let server = HttpServer::new(config);

    let (status, headers, body) = get_response(server.router(), "/api/probe").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Pong");
    assert!(!headers.contains_key("server"));
    assert_eq!(header_values(&headers, "x-content-type-options"), vec!["nosniff"]);

    let (_, _, body) = get_response(server.router(), "/api/probe?echo=hello").await;
    assert_eq!(body, "hello");
}

#[tokio::test]
async fn test_sample_server_without_policy_keeps_server_header() {
    let server = HttpServer::new(AppConfig::default());

    let (_, headers, _) = get_response(server.router(), "/api/probe").await;
    assert_eq!(header_values(&headers, "server"), vec!["security-headers"]);
    assert!(!headers.contains_key("x-content-type-options"));
}
