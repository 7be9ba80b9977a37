//! Shared fixtures for the integration and end-to-end tests
#![allow(dead_code)]

pub mod fixture_server;
pub mod mocks;
