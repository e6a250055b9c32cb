use crate::model::Info;
use rocket::{get, serde::json::Json};

#[get("/")]
pub fn get() -> Json<Info> {
    Json(Info::default())
}
