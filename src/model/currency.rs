use super::CalcError;
use rocket::serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(crate = "rocket::serde", rename_all = "UPPERCASE")]
pub enum Currency {
    Eur,
    Usd,
    Gbp,
}

impl Currency {
    pub fn code(self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
            Currency::Gbp => "GBP",
        }
    }
}

/// Accepts upper-case ISO codes only; callers normalize first.
impl FromStr for Currency {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EUR" => Ok(Currency::Eur),
            "USD" => Ok(Currency::Usd),
            "GBP" => Ok(Currency::Gbp),
            _ => Err(CalcError::UnsupportedConversion),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod test {
    use super::Currency;
    use crate::model::CalcError;

    #[test]
    fn from_str() {
        assert_eq!(Ok(Currency::Eur), "EUR".parse());
        assert_eq!(Ok(Currency::Gbp), "GBP".parse());
        for code in &["eur", "JPY", ""] {
            assert_eq!(
                Err(CalcError::UnsupportedConversion),
                code.parse::<Currency>()
            );
        }
    }

    #[test]
    fn serialize() {
        assert_eq!("\"USD\"", serde_json::to_string(&Currency::Usd).unwrap());
    }
}
