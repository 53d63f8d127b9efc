pub mod games;
pub mod openapi;
