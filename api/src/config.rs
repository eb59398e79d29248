use errx_shared::{AppConfig, ConfigError, Environment};

/// Load configuration the way the server binary does
///
/// Variables already set in the process win; then the environment-specific
/// file (`.env.production`, ...) and finally `.env` fill the gaps.
pub fn load() -> Result<AppConfig, ConfigError> {
    let environment = Environment::from_env()?;
    dotenvy::from_filename(environment.env_file()).ok();
    dotenvy::dotenv().ok();
    AppConfig::from_env()
}
