use axum::response::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct Home {
    pub service: &'static str,
    pub status: &'static str,
}

pub async fn index() -> Json<Home> {
    Json(Home {
        service: "cinema-api",
        status: "ok",
    })
}
