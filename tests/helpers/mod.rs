//! Shared assertion helpers for integration tests.

#![allow(dead_code)]

pub mod approx_assertions;
