pub mod conversion;
pub mod discount;
pub mod money;
pub mod vat;
