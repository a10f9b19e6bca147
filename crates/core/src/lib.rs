//! Pure domain logic for covidportal.
//!
//! Nothing in this crate performs I/O. Storage backends and HTTP handlers
//! live in the `covidportal` binary crate; token and password handling
//! lives in `covidportal_auth`.

pub mod auth;
pub mod region;
pub mod storage;
