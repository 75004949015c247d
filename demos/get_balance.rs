use std::io;
use std::time::Duration;

use tracing_subscriber::EnvFilter;
use wittyflow::WittyFlowClient;

fn required(name: &str) -> io::Result<String> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let app_id = required("WITTYFLOW_APP_ID")?;
    let app_secret = required("WITTYFLOW_APP_SECRET")?;

    let client = WittyFlowClient::builder(app_id, app_secret)
        .timeout(Duration::from_secs(10))
        .build()?;
    let envelope = client.get_balance().await?;
    let balance = envelope.balance()?;

    println!(
        "balance: {} {}",
        balance.balance.as_deref().unwrap_or("?"),
        balance.currency.as_deref().unwrap_or("")
    );

    Ok(())
}
