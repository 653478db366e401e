//! # bookrec API
//!
//! REST surface for the bookrec recommendation service: the popular table,
//! the three recommendation endpoints, and the embedded frontend page.

pub mod rest;

pub use rest::RestApi;
