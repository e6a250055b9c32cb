use super::Currency;
use rocket::serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct ExchangeRate {
    pub base: Currency,
    pub quote: Currency,
    pub rate: f64,
}
