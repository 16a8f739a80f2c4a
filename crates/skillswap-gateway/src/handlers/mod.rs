//! HTTP request handlers.
//!
//! This module contains all the endpoint handlers for the gateway.

pub mod health;
pub mod profile;
pub mod relay;
pub mod views;
