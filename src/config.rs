use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    pub smtp: Option<SmtpConfig>,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
    /// Outbound From address. The upstream mailbox doubles as the sender
    /// identity, so this is the same account the credentials belong to.
    pub from: String,
    /// Recipient of admin notifications. Defaults to the outbound address.
    pub admin_to: String,
    /// Extra send attempts per email. 0 keeps sends strictly best-effort.
    pub retries: u32,
    pub retry_delay_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;

        let host: IpAddr = env_or("INTAKE_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid INTAKE_HOST: {e}"))?;

        let port: u16 = env_or("PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid PORT: {e}"))?;

        let log_level = env_or("INTAKE_LOG_LEVEL", "info");

        // Email is optional: all four EMAIL_* vars or the mailer stays off.
        let smtp = match (
            std::env::var("EMAIL_HOST").ok(),
            std::env::var("EMAIL_PORT").ok(),
            std::env::var("EMAIL_USER").ok(),
            std::env::var("EMAIL_PASS").ok(),
        ) {
            (Some(host), Some(port), Some(user), Some(pass)) => {
                let admin_to = env_or("INTAKE_ADMIN_EMAIL", &user);
                let retries: u32 = env_or("INTAKE_MAIL_RETRIES", "0")
                    .parse()
                    .map_err(|e| format!("Invalid INTAKE_MAIL_RETRIES: {e}"))?;
                let retry_delay_ms: u64 = env_or("INTAKE_MAIL_RETRY_DELAY_MS", "1000")
                    .parse()
                    .map_err(|e| format!("Invalid INTAKE_MAIL_RETRY_DELAY_MS: {e}"))?;
                Some(SmtpConfig {
                    host,
                    port: port
                        .parse()
                        .map_err(|e| format!("Invalid EMAIL_PORT: {e}"))?,
                    from: user.clone(),
                    user,
                    pass,
                    admin_to,
                    retries,
                    retry_delay_ms,
                })
            }
            _ => None,
        };

        Ok(Config {
            database_url,
            host,
            port,
            log_level,
            smtp,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
