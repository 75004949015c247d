use std::io;

use tracing_subscriber::EnvFilter;
use wittyflow::{WittyFlowClient, WittyFlowError};

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
    let message_id = required("WITTYFLOW_MESSAGE_ID")?;

    let client = WittyFlowClient::new(app_id, app_secret)?;
    match client.get_status(&message_id).await {
        Ok(envelope) => {
            let status = envelope.message_status()?;
            println!(
                "status: {:?}, billing: {:?}, date: {:?}, final: {}",
                status.status,
                status.billing,
                status.readable_date,
                status.is_final()
            );
        }
        Err(err @ WittyFlowError::Remote { .. }) => {
            eprintln!(
                "{err}: {}",
                err.remote_message().unwrap_or_else(|| "no details".to_owned())
            );
        }
        Err(err) if err.is_retryable() => eprintln!("{err}; try again later"),
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
