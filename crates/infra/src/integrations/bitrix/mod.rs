//! Bitrix24 CRM integration

pub mod client;
pub mod types;

pub use client::BitrixClient;
