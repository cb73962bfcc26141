// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command-line argument configuration layer.
//!
//! [`ClientArgs`] is a set of `--confserv-*` flags that can be flattened into an
//! application's own `clap` parser, or parsed on its own with
//! [`ClientArgs::from_args`].

use crate::domain::{PartialClientConfig, Result, SettingsError, WireProtocol};
use crate::ports::ConfigLayer;
use clap::{Args, Parser};
use std::ffi::OsString;
use std::fmt;

/// Command-line flags for client construction parameters.
///
/// # Priority
///
/// Command-line arguments have the highest priority (3), which means they
/// override both environment variables (priority 2) and configuration files
/// (priority 1).
///
/// # Examples
///
/// Embedding in an application's parser:
///
/// ```rust
/// use clap::Parser;
/// use confserv::adapters::ClientArgs;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(flatten)]
///     confserv: ClientArgs,
///     #[arg(long)]
///     verbose: bool,
/// }
///
/// let cli = Cli::parse_from(["app", "--confserv-token", "abc", "--verbose"]);
/// assert_eq!(cli.confserv.token.as_deref(), Some("abc"));
/// ```
#[derive(Clone, Default, PartialEq, Eq, Args)]
pub struct ClientArgs {
    /// Base URL of the configuration service
    #[arg(long = "confserv-server", value_name = "URL")]
    pub server: Option<String>,

    /// Access token presented to the configuration service
    #[arg(long = "confserv-token", value_name = "TOKEN")]
    pub token: Option<String>,

    /// Wire protocol (key-bearer or name-token)
    #[arg(long = "confserv-protocol", value_name = "PROTOCOL")]
    pub protocol: Option<WireProtocol>,

    /// Request timeout in seconds
    #[arg(long = "confserv-timeout-secs", value_name = "SECS")]
    pub timeout_secs: Option<u64>,
}

#[derive(Parser)]
#[command(no_binary_name = true)]
struct Standalone {
    #[command(flatten)]
    args: ClientArgs,
}

impl ClientArgs {
    /// Parses the `--confserv-*` flags from an argument list that does not
    /// include the program name.
    ///
    /// Unknown flags are an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use confserv::adapters::ClientArgs;
    /// use confserv::domain::WireProtocol;
    ///
    /// let args = ClientArgs::from_args(["--confserv-protocol=name-token"]).unwrap();
    /// assert_eq!(args.protocol, Some(WireProtocol::NameToken));
    /// ```
    pub fn from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Standalone::try_parse_from(args)
            .map(|parsed| parsed.args)
            .map_err(|e| SettingsError::Configuration {
                layer: "cli".to_string(),
                message: e.to_string(),
                source: Some(Box::new(e)),
            })
    }
}

impl fmt::Debug for ClientArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientArgs")
            .field("server", &self.server)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("protocol", &self.protocol)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ConfigLayer for ClientArgs {
    fn name(&self) -> &str {
        "cli"
    }

    fn priority(&self) -> u8 {
        3
    }

    fn load(&self) -> Result<PartialClientConfig> {
        Ok(PartialClientConfig {
            server: self.server.clone(),
            token: self.token.clone(),
            protocol: self.protocol,
            timeout_secs: self.timeout_secs,
        })
    }
}
