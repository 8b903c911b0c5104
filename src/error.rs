use thiserror::Error;

/// Failures surfaced by the client and the dispatcher.
///
/// Everything here is terminal for the invocation: the process performs a
/// single unit of work, so nothing is retried or recovered locally.
#[derive(Debug, Error)]
pub enum Error {
  /// The requested method name is not in the registry.
  #[error("method '{0}' not found; use --list to see all available methods")]
  UnknownMethod(String),

  /// The positional arguments do not match the method's declared signature.
  #[error("invalid arguments for '{method}': {reason}\nusage: {usage}")]
  InvalidArguments {
    method: &'static str,
    reason: String,
    usage: String,
  },

  /// The HTTP request could not be completed (connection, DNS, timeout).
  #[error("request failed: {0}")]
  Transport(#[from] reqwest::Error),

  /// The response body was not valid JSON.
  #[error("response body is not valid JSON: {0}")]
  Decode(#[from] serde_json::Error),
}
