#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::{App, HttpServer};

    use tarocard::web::gate::{AccessGate, GateConfig};
    use tarocard::web::routes;

    dotenvy::dotenv().ok();
    env_logger::init();

    let gate = GateConfig::from_env();
    if !gate.is_configured() {
        log::warn!(
            "BASIC_AUTH_USER/BASIC_AUTH_PASS not set; every gated request will be rejected"
        );
    }

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    log::info!("Tarocard site listening on {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(AccessGate::new(gate.clone()))
            .configure(routes::configure)
            .service(Files::new("/pkg", "./pkg").prefer_utf8(true))
            .service(Files::new("/static", "./static").prefer_utf8(true))
    })
    .bind(bind_addr)?
    .run()
    .await
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // The wasm build exposes `mount()` from the library instead.
}
