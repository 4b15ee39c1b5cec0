pub mod templates;

use std::time::Duration;

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::SmtpConfig;

/// A mail send failure. Never converted into an HTTP response; callers log
/// it and move on.
#[derive(Debug)]
pub struct MailError(String);

impl std::fmt::Display for MailError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for MailError {}

/// Shared SMTP dispatcher, built once at startup and reused for every send.
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
    admin_to: String,
    retries: u32,
    retry_delay: Duration,
}

impl Mailer {
    pub fn new(config: &SmtpConfig) -> Result<Self, MailError> {
        let creds = Credentials::new(config.user.clone(), config.pass.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| MailError(format!("SMTP relay error: {e}")))?
            .port(config.port)
            .credentials(creds)
            .build();

        Ok(Self {
            transport,
            from: config.from.clone(),
            admin_to: config.admin_to.clone(),
            retries: config.retries,
            retry_delay: Duration::from_millis(config.retry_delay_ms),
        })
    }

    /// Auto-reply to the form submitter. Reply-To mirrors the recipient,
    /// matching the upstream mail setup.
    pub async fn send_client_reply(
        &self,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), MailError> {
        self.send(to, Some(to), subject, body).await
    }

    /// Internal alert to the admin mailbox.
    pub async fn send_admin_notification(&self, subject: &str, body: &str) -> Result<(), MailError> {
        self.send(&self.admin_to, None, subject, body).await
    }

    async fn send(
        &self,
        to: &str,
        reply_to: Option<&str>,
        subject: &str,
        body: &str,
    ) -> Result<(), MailError> {
        let mut builder = Message::builder()
            .from(
                self.from
                    .parse()
                    .map_err(|e| MailError(format!("Invalid from address: {e}")))?,
            )
            .to(to
                .parse()
                .map_err(|e| MailError(format!("Invalid to address: {e}")))?);

        if let Some(reply_to) = reply_to {
            builder = builder.reply_to(
                reply_to
                    .parse()
                    .map_err(|e| MailError(format!("Invalid reply-to address: {e}")))?,
            );
        }

        let message = builder
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| MailError(format!("Failed to build email: {e}")))?;

        // Default policy is a single attempt; retries are an opt-in config knob.
        let attempts = self.retries + 1;
        let mut last_err = None;
        for attempt in 0..attempts {
            if attempt > 0 {
                tokio::time::sleep(self.retry_delay).await;
            }
            match self.transport.send(message.clone()).await {
                Ok(_) => return Ok(()),
                Err(e) => last_err = Some(e),
            }
        }

        Err(MailError(format!(
            "Failed to send email after {attempts} attempt(s): {}",
            last_err.map(|e| e.to_string()).unwrap_or_default()
        )))
    }
}
