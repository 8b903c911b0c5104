//! Static method registry and positional dispatch.
//!
//! The set of callable names is closed: every method the CLI can invoke is
//! listed in [`METHODS`], together with its one-line description and its
//! ordered parameter list. The dispatcher resolves a user-supplied name
//! against this table, validates the argument count, and binds the raw
//! string arguments positionally onto the matching [`Client`] method.

use serde_json::Value;

use crate::client::Client;
use crate::error::Error;

/// One positional parameter of a method.
#[derive(Debug)]
pub struct Param {
  pub name: &'static str,
  pub required: bool,
}

/// Registry entry: a callable method with its documentation.
#[derive(Debug)]
pub struct MethodSpec {
  pub name: &'static str,
  pub description: &'static str,
  pub params: &'static [Param],
}

const fn required(name: &'static str) -> Param {
  Param {
    name,
    required: true,
  }
}

const fn optional(name: &'static str) -> Param {
  Param {
    name,
    required: false,
  }
}

/// Every method the CLI exposes, in listing order.
pub const METHODS: &[MethodSpec] = &[
  MethodSpec {
    name: "get_sub_domains",
    description: "Find subdomains of a given domain.",
    params: &[required("domain")],
  },
  MethodSpec {
    name: "get_phone_info",
    description: "Get information about a phone number.",
    params: &[required("number")],
  },
  MethodSpec {
    name: "get_skype_user_info",
    description: "Get information about a Skype user.",
    params: &[required("username")],
  },
  MethodSpec {
    name: "get_skype_ip_info",
    description: "Get Skype accounts associated with an IP address.",
    params: &[required("ip")],
  },
  MethodSpec {
    name: "firewall_resolver",
    description: "Detect firewalls on a given domain.",
    params: &[required("domain")],
  },
  MethodSpec {
    name: "port_scanner",
    description: "Scan ports on a given IP address.",
    params: &[required("ip")],
  },
  MethodSpec {
    name: "check_port",
    description: "Check if a specific port is open on a given host.",
    params: &[required("host"), required("port")],
  },
  MethodSpec {
    name: "ping",
    description: "Ping a given IP address.",
    params: &[required("ip")],
  },
  MethodSpec {
    name: "hostname_resolver",
    description: "Resolve the hostname for a given IP address.",
    params: &[required("ip")],
  },
  MethodSpec {
    name: "dnschecker",
    description: "Check DNS records for a given domain.",
    params: &[required("domain")],
  },
  MethodSpec {
    name: "host_to_ip",
    description: "Convert a hostname to an IP address.",
    params: &[required("host")],
  },
  MethodSpec {
    name: "ip_to_domains",
    description: "Find domains hosted on a given IP address.",
    params: &[required("ip")],
  },
  MethodSpec {
    name: "alexa_rank",
    description: "Get the Alexa rank for a given URL.",
    params: &[required("url")],
  },
  MethodSpec {
    name: "whois_checker",
    description: "Perform a WHOIS lookup for a given domain.",
    params: &[required("domain")],
  },
  MethodSpec {
    name: "screenshot_tool",
    description: "Take a screenshot of a given URL.",
    params: &[required("url")],
  },
  MethodSpec {
    name: "geo_ip",
    description: "Get geolocation information for a given host.",
    params: &[required("host")],
  },
  MethodSpec {
    name: "website_up_or_down_checker",
    description: "Check if a website is up or down.",
    params: &[required("host")],
  },
  MethodSpec {
    name: "site_reputation_checker",
    description: "Check the reputation of a given URL.",
    params: &[required("url")],
  },
  MethodSpec {
    name: "get_website_headers",
    description: "Get the HTTP response headers of a given website.",
    params: &[required("host")],
  },
  MethodSpec {
    name: "link_backup",
    description: "Create a backup link for a given URL.",
    params: &[required("url")],
  },
  MethodSpec {
    name: "url_shortener",
    description: "Shorten a given URL.",
    params: &[required("url")],
  },
  MethodSpec {
    name: "random_string_picker",
    description: "Pick a random string from a given text file URL.",
    params: &[required("textfile")],
  },
  MethodSpec {
    name: "dictionary",
    description: "Look up the definition of a word.",
    params: &[required("word")],
  },
  MethodSpec {
    name: "image_reverse",
    description: "Perform a reverse image search on a given picture URL.",
    params: &[required("url")],
  },
  MethodSpec {
    name: "synonym_finder",
    description: "Find synonyms for a given word.",
    params: &[required("word")],
  },
  MethodSpec {
    name: "email_validator",
    description: "Validate an email address.",
    params: &[required("email")],
  },
  MethodSpec {
    name: "disposable_mail_check",
    description: "Check if an email address belongs to a disposable mail service.",
    params: &[required("email")],
  },
  MethodSpec {
    name: "ip_validator",
    description: "Validate an IP address.",
    params: &[required("ip")],
  },
  MethodSpec {
    name: "tor_checker",
    description: "Check if an IP address is a Tor exit node.",
    params: &[required("ip")],
  },
  MethodSpec {
    name: "translator",
    description: "Translate text to a given language.",
    params: &[required("text"), required("tolanguage")],
  },
  MethodSpec {
    name: "random_info_generator",
    description: "Generate random person information.",
    params: &[optional("gender")],
  },
  MethodSpec {
    name: "youtube_video_details",
    description: "Get details about a YouTube video.",
    params: &[required("videoid")],
  },
  MethodSpec {
    name: "youtube_to_mp3",
    description: "Extract the MP3 audio of a YouTube video.",
    params: &[required("videoid")],
  },
  MethodSpec {
    name: "ip_logger",
    description: "Interact with the IP logger.",
    params: &[optional("action")],
  },
  MethodSpec {
    name: "bitcoin_balance",
    description: "Check the balance of a Bitcoin address.",
    params: &[required("address")],
  },
  MethodSpec {
    name: "ethereum_balance",
    description: "Check the balance of an Ethereum address.",
    params: &[required("address")],
  },
  MethodSpec {
    name: "currency_converter",
    description: "Convert an amount between two currencies.",
    params: &[required("amount"), required("source"), required("target")],
  },
  MethodSpec {
    name: "currency_rates",
    description: "Get current exchange rates for a source currency.",
    params: &[required("source")],
  },
  MethodSpec {
    name: "weather_checker",
    description: "Check the weather for a given location.",
    params: &[required("location"), optional("unit")],
  },
  MethodSpec {
    name: "qr_code_generator",
    description: "Generate a QR code image for a string.",
    params: &[required("string"), optional("size")],
  },
  MethodSpec {
    name: "text_parser",
    description: "Parse the text content of a given URL.",
    params: &[required("url")],
  },
  MethodSpec {
    name: "proxy_detector",
    description: "Detect if an IP address is a proxy.",
    params: &[required("ip")],
  },
  MethodSpec {
    name: "password_generator",
    description: "Generate a random password.",
    params: &[required("length"), required("include"), required("customlist")],
  },
  MethodSpec {
    name: "random_number_generator",
    description: "Generate a random number.",
    params: &[optional("length"), optional("between")],
  },
  MethodSpec {
    name: "license_key_generator",
    description: "Generate license keys from a template.",
    params: &[required("template"), optional("amount")],
  },
  MethodSpec {
    name: "either_or",
    description: "Get a random either/or question.",
    params: &[],
  },
  MethodSpec {
    name: "gif_finder",
    description: "Find a GIF matching a keyword.",
    params: &[required("keyword")],
  },
];

/// Looks up a method by its user-facing name.
pub fn find(name: &str) -> Option<&'static MethodSpec> {
  METHODS.iter().find(|spec| spec.name == name)
}

/// Renders the positional signature, like `<host> <port>` or `[gender]`.
pub fn signature(spec: &MethodSpec) -> String {
  spec
    .params
    .iter()
    .map(|param| {
      if param.required {
        format!("<{}>", param.name)
      } else {
        format!("[{}]", param.name)
      }
    })
    .collect::<Vec<_>>()
    .join(" ")
}

fn usage(spec: &MethodSpec) -> String {
  let args = signature(spec);
  if args.is_empty() {
    spec.name.to_string()
  } else {
    format!("{} {args}", spec.name)
  }
}

fn check_arity(
  spec: &'static MethodSpec,
  args: &[String],
) -> Result<(), Error> {
  let min = spec.params.iter().filter(|param| param.required).count();
  let max = spec.params.len();
  if args.len() < min || args.len() > max {
    let expected = if min == max {
      min.to_string()
    } else {
      format!("{min} to {max}")
    };
    return Err(Error::InvalidArguments {
      method: spec.name,
      reason: format!("expected {expected} argument(s), got {}", args.len()),
      usage: usage(spec),
    });
  }
  Ok(())
}

fn parse_number<T>(
  spec: &'static MethodSpec,
  param: &'static str,
  raw: &str,
) -> Result<T, Error>
where
  T: std::str::FromStr,
  T::Err: std::fmt::Display,
{
  raw.parse().map_err(|err| Error::InvalidArguments {
    method: spec.name,
    reason: format!("parameter '{param}' must be a number, got '{raw}' ({err})"),
    usage: usage(spec),
  })
}

/// Invokes `spec` on `client`, binding `args` positionally.
///
/// Arguments arrive as raw strings from the command line; numeric
/// parameters are parsed here and declared defaults are applied by the
/// operations themselves.
///
/// # Errors
///
/// [`Error::InvalidArguments`] when the argument count does not match the
/// declared signature or a numeric argument fails to parse; otherwise
/// whatever the underlying operation returns.
pub async fn invoke(
  client: &Client,
  spec: &'static MethodSpec,
  args: &[String],
) -> Result<Value, Error> {
  check_arity(spec, args)?;

  let arg = |index: usize| args[index].as_str();
  let opt = |index: usize| args.get(index).map(String::as_str);

  match spec.name {
    "get_sub_domains" => client.get_sub_domains(arg(0)).await,
    "get_phone_info" => client.get_phone_info(arg(0)).await,
    "get_skype_user_info" => client.get_skype_user_info(arg(0)).await,
    "get_skype_ip_info" => client.get_skype_ip_info(arg(0)).await,
    "firewall_resolver" => client.firewall_resolver(arg(0)).await,
    "port_scanner" => client.port_scanner(arg(0)).await,
    "check_port" => {
      let port = parse_number(spec, "port", arg(1))?;
      client.check_port(arg(0), port).await
    }
    "ping" => client.ping(arg(0)).await,
    "hostname_resolver" => client.hostname_resolver(arg(0)).await,
    "dnschecker" => client.dnschecker(arg(0)).await,
    "host_to_ip" => client.host_to_ip(arg(0)).await,
    "ip_to_domains" => client.ip_to_domains(arg(0)).await,
    "alexa_rank" => client.alexa_rank(arg(0)).await,
    "whois_checker" => client.whois_checker(arg(0)).await,
    "screenshot_tool" => client.screenshot_tool(arg(0)).await,
    "geo_ip" => client.geo_ip(arg(0)).await,
    "website_up_or_down_checker" => {
      client.website_up_or_down_checker(arg(0)).await
    }
    "site_reputation_checker" => client.site_reputation_checker(arg(0)).await,
    "get_website_headers" => client.get_website_headers(arg(0)).await,
    "link_backup" => client.link_backup(arg(0)).await,
    "url_shortener" => client.url_shortener(arg(0)).await,
    "random_string_picker" => client.random_string_picker(arg(0)).await,
    "dictionary" => client.dictionary(arg(0)).await,
    "image_reverse" => client.image_reverse(arg(0)).await,
    "synonym_finder" => client.synonym_finder(arg(0)).await,
    "email_validator" => client.email_validator(arg(0)).await,
    "disposable_mail_check" => client.disposable_mail_check(arg(0)).await,
    "ip_validator" => client.ip_validator(arg(0)).await,
    "tor_checker" => client.tor_checker(arg(0)).await,
    "translator" => client.translator(arg(0), arg(1)).await,
    "random_info_generator" => client.random_info_generator(opt(0)).await,
    "youtube_video_details" => client.youtube_video_details(arg(0)).await,
    "youtube_to_mp3" => client.youtube_to_mp3(arg(0)).await,
    "ip_logger" => client.ip_logger(opt(0)).await,
    "bitcoin_balance" => client.bitcoin_balance(arg(0)).await,
    "ethereum_balance" => client.ethereum_balance(arg(0)).await,
    "currency_converter" => {
      let amount = parse_number(spec, "amount", arg(0))?;
      client.currency_converter(amount, arg(1), arg(2)).await
    }
    "currency_rates" => client.currency_rates(arg(0)).await,
    "weather_checker" => client.weather_checker(arg(0), opt(1)).await,
    "qr_code_generator" => {
      let size = opt(1)
        .map(|raw| parse_number(spec, "size", raw))
        .transpose()?;
      client.qr_code_generator(arg(0), size).await
    }
    "text_parser" => client.text_parser(arg(0)).await,
    "proxy_detector" => client.proxy_detector(arg(0)).await,
    "password_generator" => {
      let length = parse_number(spec, "length", arg(0))?;
      client.password_generator(length, arg(1), arg(2)).await
    }
    "random_number_generator" => {
      let length = opt(0)
        .map(|raw| parse_number(spec, "length", raw))
        .transpose()?;
      client.random_number_generator(length, opt(1)).await
    }
    "license_key_generator" => {
      let amount = opt(1)
        .map(|raw| parse_number(spec, "amount", raw))
        .transpose()?;
      client.license_key_generator(arg(0), amount).await
    }
    "either_or" => client.either_or().await,
    "gif_finder" => client.gif_finder(arg(0)).await,
    name => Err(Error::UnknownMethod(name.to_string())),
  }
}
