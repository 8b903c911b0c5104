use crate::cli::Cli;
use crate::client::Client;
use crate::error::Error;
use crate::output;
use crate::registry;
use anyhow::{Context, Result};
use clap::Parser;

pub struct App {
  cli: Cli,
  client: Client,
}

impl App {
  pub fn new() -> Result<Self> {
    let cli = Cli::parse();
    let client = Client::new(cli.apikey.clone())
      .context("Failed to build the HTTP client")?;

    Ok(Self { cli, client })
  }

  /// Performs the single unit of work for this invocation: either the
  /// listing, or one dispatch followed by printing the JSON response.
  pub async fn run(&self) -> Result<()> {
    if self.cli.list {
      output::print_listing();
      return Ok(());
    }

    let spec = registry::find(&self.cli.method)
      .ok_or_else(|| Error::UnknownMethod(self.cli.method.clone()))?;

    output::print_invocation(spec);
    let result = registry::invoke(&self.client, spec, &self.cli.args).await?;
    output::print_result(&result)
  }
}
