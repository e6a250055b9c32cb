use super::ApiError;
use rocket::serde::json::Json;

pub type ApiResult<T> = Result<Json<T>, ApiError>;
