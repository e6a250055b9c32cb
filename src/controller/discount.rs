use crate::{
    model::{ApiResult, Discount},
    service::discount,
};
use rocket::{get, serde::json::Json};

#[get("/remise?<prix>&<pourcentage>")]
pub fn get(prix: Option<String>, pourcentage: Option<String>) -> ApiResult<Discount> {
    Ok(Json(discount::apply(prix.as_deref(), pourcentage.as_deref())?))
}
