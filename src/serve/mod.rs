//! # HTTP Surface
//!
//! Thin adapter between the collection pipeline and HTTP: two GET routes,
//! each running a full collection and rendering the result. Any pipeline
//! failure becomes a 500 response while the process stays up for subsequent
//! requests.

mod routes;

pub use routes::{router, run};
