use rocket::serde::{Deserialize, Serialize};

/// Tax-inclusive price: `ttc` is `ht` plus `taux` percent.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct Vat {
    pub ht: f64,
    pub taux: f64,
    pub ttc: f64,
}
