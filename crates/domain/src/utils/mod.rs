//! Pure helpers shared by the domain types

pub mod bitrix_values;
pub mod dates;
