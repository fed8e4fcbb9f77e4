use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub question_bank_path: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        // Determine environment (defaults to dev)
        let env = env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string());

        // Build configuration from config/*.toml + ENV overrides
        let config_builder = config::Config::builder()
            // Load base config from TOML file
            .add_source(
                config::File::with_name(&format!("config/{}", env)).required(false), // Allow missing config file, fallback to ENV
            )
            // Override with environment variables (prefix: APP_)
            .add_source(config::Environment::with_prefix("APP").separator("__"));

        let settings = config_builder.build()?;

        let host = settings
            .get_string("server.host")
            .or_else(|_| env::var("HOST"))
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = settings
            .get_int("server.port")
            .map(|p| p as u16)
            .or_else(|_| {
                env::var("PORT")
                    .map_err(|_| ())
                    .and_then(|p| p.parse::<u16>().map_err(|_| ()))
            })
            .unwrap_or(8081);

        let question_bank_path = settings
            .get_string("quiz.question_bank_path")
            .ok()
            .or_else(|| env::var("QUESTION_BANK_PATH").ok());

        Ok(Config {
            host,
            port,
            question_bank_path,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
