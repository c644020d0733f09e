//! Infrastructure layer - adapters for fetching OpenAPI documents from the
//! outside world (filesystem, HTTP).

pub mod openapi;

pub use openapi::*;
