pub mod gate;
pub mod routes;
pub mod templates;
