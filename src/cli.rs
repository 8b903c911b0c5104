use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "c99", version)]
#[command(
  about = "Command-line client for the c99.nl OSINT and data-lookup API.",
  long_about = "A command-line client for the c99.nl API. Every call maps one method name to one HTTP GET against the service and prints the JSON response unchanged. Use --list to enumerate the available methods."
)]
pub struct Cli {
  /// API key sent with every request.
  #[arg(long, value_name = "KEY")]
  pub apikey: String,

  /// Name of the method to invoke (see --list).
  #[arg(long, value_name = "NAME")]
  pub method: String,

  /// Positional arguments for the method, in declared order.
  #[arg(long, num_args = 0.., value_name = "ARG")]
  pub args: Vec<String>,

  /// List all available methods with their descriptions and exit.
  #[arg(long)]
  pub list: bool,
}
