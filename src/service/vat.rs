use crate::{
    model::{CalcError, Vat},
    service::money::{parse_amount, parse_number, present, round_amount},
};
use tracing::debug;

const PARAMS: &str = "ht, taux";

/// No upper bound on `taux`: rates above 100% are accepted.
pub fn ttc(ht: Option<&str>, taux: Option<&str>) -> Result<Vat, CalcError> {
    let (ht, taux) = match (present(ht), present(taux)) {
        (Some(ht), Some(taux)) => (ht, taux),
        _ => return Err(CalcError::MissingParameters(PARAMS)),
    };

    let ht = parse_amount(ht)?;
    let taux = parse_number(taux)
        .filter(|t| *t >= 0.0)
        .ok_or(CalcError::InvalidVatRate)?;

    let ttc = round_amount(ht * (1.0 + taux / 100.0))?;
    debug!(ht, taux, ttc, "Computed VAT");

    Ok(Vat { ht, taux, ttc })
}
