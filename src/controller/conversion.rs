use crate::{
    model::{ApiResult, Conversion},
    repository::ExchangeRateRepository,
    service::conversion,
};
use rocket::{get, serde::json::Json, State};

#[get("/convert?<from>&<to>&<amount>")]
pub fn get(
    from: Option<String>,
    to: Option<String>,
    amount: Option<String>,
    repo: &State<ExchangeRateRepository>,
) -> ApiResult<Conversion> {
    let conversion = conversion::convert(
        from.as_deref(),
        to.as_deref(),
        amount.as_deref(),
        repo.inner(),
    )?;

    Ok(Json(conversion))
}
