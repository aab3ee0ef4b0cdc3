use askama::Template;

/// Document shell served for every page hit. Loads Tailwind from the CDN
/// and tags the Leaflet assets with stable element ids so the map
/// component can watch their load/error events.
#[derive(Template)]
#[template(path = "shell.html")]
pub struct ShellTemplate {
    pub title: String,
}
