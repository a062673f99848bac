//! Shipping cost domain: tariff tables, package models, and the pricing engine

pub mod constants;
pub mod model;
pub mod service;
