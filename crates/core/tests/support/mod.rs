//! Shared test helpers for `dealboard-core` integration tests.
//!
//! In-memory fakes of the core ports so service tests can focus on
//! behaviour instead of HTTP and filesystem plumbing.

#![allow(dead_code)]

pub mod fakes;
