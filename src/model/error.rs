use rocket::http::Status;
use thiserror::Error;

/// Client input rejected by one of the calculators.
#[derive(Debug, Error, PartialEq)]
pub enum CalcError {
    #[error("Paramètres manquants: {0}")]
    MissingParameters(&'static str),
    #[error("Montant invalide")]
    InvalidAmount,
    #[error("Conversion non supportée")]
    UnsupportedConversion,
    #[error("Taux de TVA invalide")]
    InvalidVatRate,
    #[error("Pourcentage invalide (0-100)")]
    InvalidPercentage,
}

impl CalcError {
    pub fn status(&self) -> Status {
        Status::BadRequest
    }
}
