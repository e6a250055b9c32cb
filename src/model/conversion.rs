use super::Currency;
use rocket::serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct Conversion {
    pub from: Currency,
    pub to: Currency,
    pub original_amount: f64,
    pub converted_amount: f64,
}
