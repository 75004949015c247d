use std::io;

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
    let phone = required("WITTYFLOW_PHONE")?;
    let message = std::env::var("WITTYFLOW_MESSAGE")
        .unwrap_or_else(|_| "Hello from the wittyflow demo.".to_owned());

    let client = WittyFlowClient::new(app_id, app_secret)?;
    let envelope = client.send_sms("Wittyflow", &phone, &message).await?;
    let sent = envelope.sent_message()?;

    println!(
        "status: {}, code: {}, message_id: {:?}, cost: {:?}, segments: {:?}",
        envelope.status, envelope.code, sent.message_id, sent.cost, sent.message_segments
    );

    Ok(())
}
