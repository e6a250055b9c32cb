use crate::{
    model::{CalcError, Discount},
    service::money::{parse_amount, parse_number, present, round_amount},
};
use tracing::debug;

const PARAMS: &str = "prix, pourcentage";

pub fn apply(prix: Option<&str>, pourcentage: Option<&str>) -> Result<Discount, CalcError> {
    let (prix, pourcentage) = match (present(prix), present(pourcentage)) {
        (Some(prix), Some(pourcentage)) => (prix, pourcentage),
        _ => return Err(CalcError::MissingParameters(PARAMS)),
    };

    let prix_initial = parse_amount(prix)?;
    let pourcentage = parse_number(pourcentage)
        .filter(|p| (0.0..=100.0).contains(p))
        .ok_or(CalcError::InvalidPercentage)?;

    let prix_final = round_amount(prix_initial * (1.0 - pourcentage / 100.0))?;
    debug!(prix_initial, pourcentage, prix_final, "Applied discount");

    Ok(Discount {
        prix_initial,
        pourcentage,
        prix_final,
    })
}
