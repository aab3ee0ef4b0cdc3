use actix_web::{get, HttpResponse, Responder};
use askama::Template;

use crate::web::templates::ShellTemplate;

pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(site_index).service(robots).service(sitemap);
}

#[get("/")]
async fn site_index() -> impl Responder {
    let shell = ShellTemplate {
        title: "Tarocard".to_string(),
    };
    match shell.render() {
        Ok(html) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html),
        Err(e) => {
            log::error!("Failed to render document shell: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/robots.txt")]
async fn robots() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("User-agent: *\nAllow: /\n")
}

#[get("/sitemap.xml")]
async fn sitemap() -> impl Responder {
    HttpResponse::Ok()
        .content_type("application/xml; charset=utf-8")
        .body(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n\
             <url><loc>https://tarocard.it/</loc></url>\n\
             </urlset>\n",
        )
}
