#[cfg(test)]
pub mod gate_tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App, HttpResponse};
    use base64::engine::general_purpose::STANDARD as BASE64;
    use base64::Engine as _;

    use tarocard::web::gate::{authorize, is_exempt, AccessGate, GateConfig};

    fn basic(user: &str, pass: &str) -> String {
        format!("Basic {}", BASE64.encode(format!("{user}:{pass}")))
    }

    fn secrets() -> GateConfig {
        GateConfig::new("iat", "valtaro")
    }

    macro_rules! gated_app {
        ($config:expr) => {
            test::init_service(
                App::new()
                    .wrap(AccessGate::new($config))
                    .route("/", web::get().to(|| async { HttpResponse::Ok().body("home") }))
                    .route(
                        "/robots.txt",
                        web::get().to(|| async { HttpResponse::Ok().body("robots") }),
                    ),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn missing_header_is_challenged() {
        let app = gated_app!(secrets());
        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            res.headers().get("www-authenticate").unwrap(),
            "Basic realm=\"Protected\""
        );
        let body = test::read_body(res).await;
        assert_eq!(body, "Auth required.");
    }

    #[actix_web::test]
    async fn correct_credential_is_allowed() {
        let app = gated_app!(secrets());
        let req = test::TestRequest::get()
            .uri("/")
            .insert_header(("Authorization", basic("iat", "valtaro")))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn wrong_password_is_challenged() {
        let app = gated_app!(secrets());
        let req = test::TestRequest::get()
            .uri("/")
            .insert_header(("Authorization", basic("iat", "valceno")))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn malformed_headers_are_challenged() {
        let app = gated_app!(secrets());
        for value in [
            "Bearer abc123".to_string(),
            "Basic".to_string(),
            "Basic !!!not-base64!!!".to_string(),
            // Valid base64, but no colon inside.
            format!("Basic {}", BASE64.encode("iatvaltaro")),
        ] {
            let req = test::TestRequest::get()
                .uri("/")
                .insert_header(("Authorization", value.clone()))
                .to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "header {value:?}");
        }
    }

    #[actix_web::test]
    async fn unconfigured_gate_rejects_everything() {
        let app = gated_app!(GateConfig::default());
        let req = test::TestRequest::get()
            .uri("/")
            .insert_header(("Authorization", basic("iat", "valtaro")))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn crawler_files_bypass_the_gate() {
        let app = gated_app!(secrets());
        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/robots.txt").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[::core::prelude::v1::test]
    fn exempt_list_covers_assets_and_crawler_files() {
        for path in ["/favicon.ico", "/robots.txt", "/sitemap.xml", "/pkg/tarocard.js", "/static/logo.png"] {
            assert!(is_exempt(path), "{path} should be exempt");
        }
        assert!(!is_exempt("/"));
        assert!(!is_exempt("/admin"));
    }

    #[::core::prelude::v1::test]
    fn authorize_is_a_strict_dichotomy() {
        let config = secrets();
        let good = basic("iat", "valtaro");
        assert!(authorize(Some(&good), &config));
        assert!(!authorize(None, &config));
        for bad in [
            "".to_string(),
            "Basic".to_string(),
            "Digest abc".to_string(),
            "Basic aWF0".to_string(),
            basic("iat", ""),
            basic("", "valtaro"),
            basic("IAT", "valtaro"),
        ] {
            assert!(!authorize(Some(&bad), &config), "header {bad:?}");
        }
    }
}
