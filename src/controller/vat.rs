use crate::{
    model::{ApiResult, Vat},
    service::vat,
};
use rocket::{get, serde::json::Json};

#[get("/tva?<ht>&<taux>")]
pub fn get(ht: Option<String>, taux: Option<String>) -> ApiResult<Vat> {
    Ok(Json(vat::ttc(ht.as_deref(), taux.as_deref())?))
}
