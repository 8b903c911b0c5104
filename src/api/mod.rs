//! The named operations of the c99.nl API, grouped by category.
//!
//! Every operation is a thin method on [`crate::client::Client`]: it builds
//! the declared parameter mapping for one endpoint and delegates to
//! [`crate::client::Client::request`]. Responses are returned unchanged.

mod identity;
mod recon;
mod text;
mod tools;
mod web;
