use crate::model::{Currency, ExchangeRate};
use std::collections::HashMap;

/// Fixed rate table. Built once and shared read-only between handlers.
pub struct ExchangeRateRepository {
    rates: HashMap<(Currency, Currency), f64>,
}

impl ExchangeRateRepository {
    pub fn new() -> ExchangeRateRepository {
        use Currency::*;

        let rates = vec![
            ((Eur, Usd), 1.1),
            ((Usd, Gbp), 0.8),
            ((Usd, Eur), 1.0 / 1.1),
            ((Gbp, Usd), 1.0 / 0.8),
            ((Gbp, Eur), 1.0 / (1.1 * 0.8)),
        ];

        ExchangeRateRepository {
            rates: rates.into_iter().collect(),
        }
    }

    pub fn select_by_base_and_quote(
        &self,
        base: Currency,
        quote: Currency,
    ) -> Option<ExchangeRate> {
        self.rates.get(&(base, quote)).map(|rate| ExchangeRate {
            base,
            quote,
            rate: *rate,
        })
    }

    pub fn select_all(&self) -> Vec<ExchangeRate> {
        self.rates
            .iter()
            .map(|((base, quote), rate)| ExchangeRate {
                base: *base,
                quote: *quote,
                rate: *rate,
            })
            .collect()
    }
}

impl Default for ExchangeRateRepository {
    fn default() -> Self {
        ExchangeRateRepository::new()
    }
}

#[cfg(test)]
mod test {
    use crate::{
        model::{Currency, ExchangeRate},
        repository::ExchangeRateRepository,
    };

    #[test]
    fn select_by_base_and_quote() {
        let repo = ExchangeRateRepository::new();
        let res = repo.select_by_base_and_quote(Currency::Eur, Currency::Usd);
        assert_eq!(
            Some(ExchangeRate {
                base: Currency::Eur,
                quote: Currency::Usd,
                rate: 1.1,
            }),
            res
        );
    }

    #[test]
    fn select_by_base_and_quote_inversed() {
        let repo = ExchangeRateRepository::new();
        let rate = repo
            .select_by_base_and_quote(Currency::Gbp, Currency::Eur)
            .unwrap();
        assert_eq!(1.0 / (1.1 * 0.8), rate.rate);
    }

    #[test]
    fn select_by_base_and_quote_missing() {
        let repo = ExchangeRateRepository::new();
        assert!(repo
            .select_by_base_and_quote(Currency::Eur, Currency::Gbp)
            .is_none());
        assert!(repo
            .select_by_base_and_quote(Currency::Eur, Currency::Eur)
            .is_none());
    }

    #[test]
    fn select_all() {
        let rates = ExchangeRateRepository::new().select_all();
        assert_eq!(5, rates.len());
        assert!(rates.iter().all(|it| it.rate > 0.0));
    }
}
