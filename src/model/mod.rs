mod api_error;
pub use api_error::ApiError;
mod api_result;
pub use api_result::ApiResult;
mod conversion;
pub use conversion::Conversion;
mod currency;
pub use currency::Currency;
mod discount;
pub use discount::Discount;
mod error;
pub use error::CalcError;
mod exchange_rate;
pub use exchange_rate::ExchangeRate;
mod info;
pub use info::Info;
mod vat;
pub use vat::Vat;
