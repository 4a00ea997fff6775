pub mod calculator;
pub mod error;
pub mod model;
pub mod service;
