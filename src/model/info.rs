use rocket::serde::{Deserialize, Serialize};

pub const NAME: &str = "API de conversion";

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct Info {
    pub name: String,
}

impl Default for Info {
    fn default() -> Info {
        Info { name: NAME.into() }
    }
}
