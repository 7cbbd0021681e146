use bson::doc;
use mongodb::Client;
use tracing::info;

/// Builds the client and pings the server, so an unreachable store fails
/// here rather than on the first request.
pub async fn connect(uri: &str) -> Result<Client, mongodb::error::Error> {
    let client = Client::with_uri_str(uri).await?;
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await?;
    info!("connected to MongoDB");
    Ok(client)
}

pub async fn disconnect(client: Client) {
    client.shutdown().await;
    info!("disconnected from MongoDB");
}
