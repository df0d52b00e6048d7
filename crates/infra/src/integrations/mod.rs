//! External service integrations

pub mod bitrix;
