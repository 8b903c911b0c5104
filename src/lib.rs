#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc)]

use anyhow::Result;

mod api;
mod app;
mod cli;
pub mod client;
pub mod error;
mod output;
pub mod registry;

/// Runs the command-line client.
///
/// This function parses command-line arguments, builds the API client, and
/// either lists the available methods or dispatches exactly one call and
/// prints the JSON response.
///
/// # Errors
///
/// Returns an error if initialization fails (e.g., building the HTTP
/// client), if the requested method is unknown or its arguments do not
/// match, or if the single request fails in transport or JSON decoding.
pub async fn run() -> Result<()> {
  let app = app::App::new()?;

  app.run().await
}
