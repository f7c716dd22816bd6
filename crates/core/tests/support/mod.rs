//! Shared test helpers for `stepcast-core` integration tests.
//!
//! Lightweight fakes for the platform ports so pipeline tests can focus on
//! behaviour instead of OS plumbing.

#![allow(dead_code)]

pub mod fakes;
