// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the settings client.
//!
//! This example demonstrates:
//! - Resolving client parameters from environment variables and CLI flags
//! - Fetching typed settings from the configuration service
//! - Handling absent values and coercion failures
//!
//! To run this example:
//! ```bash
//! export CONFSERV_SERVER="http://127.0.0.1:1319"
//! export CONFSERV_TOKEN="my-token"
//!
//! cargo run --example basic_usage -- --confserv-protocol name-token
//! ```

use confserv::prelude::*;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== confserv: Basic Usage ===\n");

    let args = ClientArgs::from_args(std::env::args().skip(1))?;
    let config = ConfigLoader::new().with_env_vars().with_cli_args(args).load()?;
    println!("Resolved configuration: {:?}\n", config);

    let client = RemoteSettingsClient::from_config(&config)?;

    println!("--- String ---");
    match client.get_string("app.name") {
        Ok(name) if name.is_empty() => println!("✗ app.name is not set"),
        Ok(name) => println!("✓ app.name = {}", name),
        Err(e) => println!("✗ app.name failed: {}", e),
    }

    println!("\n--- Boolean ---");
    match client.get_bool("Feature.Enabled") {
        Ok(enabled) => println!("✓ feature.enabled = {}", enabled),
        Err(e) => println!("✗ feature.enabled failed: {}", e),
    }

    println!("\n--- Integer and Duration ---");
    match client.get_int("retry.count") {
        Ok(count) => println!("✓ retry.count = {}", count),
        Err(e) => println!("✗ retry.count failed: {}", e),
    }
    match client.get_duration("retry.count") {
        Ok(d) => println!("✓ retry.count as duration = {:?}", d),
        Err(e) => println!("✗ retry.count as duration failed: {}", e),
    }

    Ok(())
}
