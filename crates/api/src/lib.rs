//! HTTP API: routing, request/response mapping and startup wiring.

pub mod app;
