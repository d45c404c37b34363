use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        // Local single-file store next to the executable unless overridden;
        // mode=rwc creates the file on first run.
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://users.db?mode=rwc".into());
        Ok(Self { database_url })
    }
}
