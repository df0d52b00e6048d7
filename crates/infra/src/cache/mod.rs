//! Report cache implementations

pub mod file_cache;

pub use file_cache::FileReportCache;
