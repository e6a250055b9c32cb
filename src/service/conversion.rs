use crate::{
    model::{CalcError, Conversion, Currency},
    repository::ExchangeRateRepository,
    service::money::{parse_amount, present, round_amount},
};
use tracing::debug;

const PARAMS: &str = "from, to, amount";

pub fn convert(
    from: Option<&str>,
    to: Option<&str>,
    amount: Option<&str>,
    repo: &ExchangeRateRepository,
) -> Result<Conversion, CalcError> {
    let (from, to, amount) = match (present(from), present(to), present(amount)) {
        (Some(from), Some(to), Some(amount)) => (from, to, amount),
        _ => return Err(CalcError::MissingParameters(PARAMS)),
    };

    let original_amount = parse_amount(amount)?;

    let base: Currency = from.to_uppercase().parse()?;
    let quote: Currency = to.to_uppercase().parse()?;
    let rate = repo
        .select_by_base_and_quote(base, quote)
        .ok_or(CalcError::UnsupportedConversion)?;

    let converted_amount = round_amount(original_amount * rate.rate)?;
    debug!(%rate.base, %rate.quote, original_amount, converted_amount, "Converted");

    Ok(Conversion {
        from: rate.base,
        to: rate.quote,
        original_amount,
        converted_amount,
    })
}
