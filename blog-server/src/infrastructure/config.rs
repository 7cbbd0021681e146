use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub mongodb_uri: String,
    pub database: String,
    pub collection: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.into());

        let host = var("HOST", "0.0.0.0");
        let port = var("PORT", "3000")
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid PORT: {}", e))?;
        let mongodb_uri = var("MONGODB_URI", "mongodb://localhost:27017/");
        let database = var("MONGODB_DATABASE", "blogsMongoDB");
        let collection = var("MONGODB_COLLECTION", "blogs");

        Ok(Self {
            host,
            port,
            mongodb_uri,
            database,
            collection,
        })
    }
}
