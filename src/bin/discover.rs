//! Runs one discovery pass and prints the healthy resources.
//!
//! Usage: `discover [BASE_URL]` (defaults to the local mock server)

use std::{env, time::Duration};

use cloud_log_sdk::{logging, sdk::CloudSdk};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging("warn");

    let base_url = env::args().nth(1);
    let sdk = CloudSdk::new(base_url.as_deref())?.with_timeout(Duration::from_secs(30))?;

    for outcome in sdk.discover_resources().await? {
        println!("{outcome}");
    }

    Ok(())
}
