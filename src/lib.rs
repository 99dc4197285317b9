//! Storefront - Hosted payment page checkout service
//!
//! This crate prices shopping carts against a fixed product catalog and hands
//! the customer off to a South African payment gateway: Ozow through a
//! hash-signed redirect, or Peach Payments through a server-created checkout
//! session.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
