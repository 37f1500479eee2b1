use crate::config::{MailSettings, MonitorConfig};
use crate::error::NotificationError;
use crate::notify::{Message, Transport};
use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use std::time::Duration;

/// Authenticated SMTP submission over implicit TLS. Opens one connection per delivery.
#[derive(Debug, Clone)]
pub struct SmtpTransport {
    host: String,
    port: u16,
    timeout: Duration,
}

impl SmtpTransport {
    pub fn new(host: impl Into<String>, port: u16, timeout: Duration) -> Self {
        Self {
            host: host.into(),
            port,
            timeout,
        }
    }

    pub fn from_config(config: &MonitorConfig) -> Self {
        Self::new(
            config.smtp_host.clone(),
            config.smtp_port,
            config.smtp_timeout(),
        )
    }
}

/// Build the outgoing email
pub fn build_email(
    mail: &MailSettings,
    to: &str,
    message: &Message,
) -> Result<lettre::Message, NotificationError> {
    let from: Mailbox = mail.sender.parse()?;
    let to: Mailbox = to.parse()?;

    Ok(lettre::Message::builder()
        .from(from)
        .to(to)
        .subject(message.subject.as_str())
        .header(ContentType::TEXT_PLAIN)
        .body(message.body.clone())?)
}

#[async_trait]
impl Transport for SmtpTransport {
    async fn deliver(
        &self,
        mail: &MailSettings,
        to: &str,
        message: &Message,
    ) -> Result<(), NotificationError> {
        let email = build_email(mail, to, message)?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&self.host)?
            .port(self.port)
            .credentials(Credentials::new(
                mail.sender.clone(),
                mail.password.clone(),
            ))
            .timeout(Some(self.timeout))
            .build();

        transport.send(email).await?;
        ::log::debug!("Delivered {:?} to {}", message.subject, to);
        Ok(())
    }
}
