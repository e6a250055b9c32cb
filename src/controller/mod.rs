pub mod catcher;
pub mod conversion;
pub mod discount;
pub mod info;
pub mod vat;
