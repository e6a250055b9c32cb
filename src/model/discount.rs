use rocket::serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct Discount {
    pub prix_initial: f64,
    pub pourcentage: f64,
    pub prix_final: f64,
}
