use std::io;

use tracing_subscriber::EnvFilter;
use wittyflow::{MessageKind, SendMessage, WittyFlowClient};

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
    let phone = required("WITTYFLOW_PHONE")?;
    let message =
        std::env::var("WITTYFLOW_MESSAGE").unwrap_or_else(|_| "URGENT: flash demo.".to_owned());

    let request = SendMessage::parse("Alert", phone, message, MessageKind::Flash)?;
    let client = WittyFlowClient::new(app_id, app_secret)?;
    let envelope = client.send_message(request).await?;

    println!(
        "status: {}, code: {}, message: {:?}, data: {}",
        envelope.status, envelope.code, envelope.message, envelope.data
    );

    Ok(())
}
