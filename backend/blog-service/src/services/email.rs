/// Outgoing mail for blog-service
use crate::config::EmailConfig;
use crate::error::{AppError, Result};
use async_trait::async_trait;
use lettre::message::{header, Mailbox, Message};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use std::sync::Arc;
use tracing::{info, warn};

/// Mail delivery collaborator.
///
/// Delivery is attempted once; failures are returned to the caller untouched.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_mail(&self, subject: &str, body: &str, from: &str, to: &[String]) -> Result<()>;
}

/// Async SMTP transport wrapper (SMTP or no-op)
#[derive(Clone)]
pub struct SmtpMailer {
    transport: Option<Arc<AsyncSmtpTransport<Tokio1Executor>>>,
}

impl SmtpMailer {
    /// Build the mailer from configuration
    ///
    /// If SMTP host is empty, operates in no-op mode (logs only).
    pub fn new(config: &EmailConfig) -> Result<Self> {
        let transport = if config.smtp_host.trim().is_empty() {
            warn!("SMTP host not configured; mailer will operate in no-op mode");
            None
        } else {
            let builder = if config.use_starttls {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            } else {
                AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            }?
            .port(config.smtp_port);

            let builder = if let (Some(username), Some(password)) =
                (&config.smtp_username, &config.smtp_password)
            {
                builder.credentials(Credentials::new(username.to_string(), password.to_string()))
            } else {
                builder
            };

            Some(Arc::new(builder.build()))
        };

        Ok(Self { transport })
    }

    pub fn is_enabled(&self) -> bool {
        self.transport.is_some()
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send_mail(&self, subject: &str, body: &str, from: &str, to: &[String]) -> Result<()> {
        let Some(transport) = &self.transport else {
            info!(
                subject,
                recipients = to.len(),
                "Mailer running in no-op mode; skipping actual send"
            );
            return Ok(());
        };

        let from = from
            .parse::<Mailbox>()
            .map_err(|e| AppError::Email(format!("Invalid sender address: {}", e)))?;

        let mut builder = Message::builder()
            .from(from)
            .subject(subject)
            .header(header::ContentType::TEXT_PLAIN);
        for recipient in to {
            let mailbox = recipient
                .parse::<Mailbox>()
                .map_err(|e| AppError::Email(format!("Invalid recipient address: {}", e)))?;
            builder = builder.to(mailbox);
        }

        let email = builder.body(body.to_string())?;
        transport.send(email).await?;
        info!(subject, "email sent successfully");
        Ok(())
    }
}
