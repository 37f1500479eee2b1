pub mod compose;
pub mod smtp;

pub use compose::Composer;
pub use smtp::SmtpTransport;

use crate::config::MailSettings;
use crate::error::NotificationError;
use crate::utils::truncate_chars;
use async_trait::async_trait;

/// A plain-text notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub subject: String,
    pub body: String,
}

impl Message {
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Short form for SMS gateways: same subject, body cut to `max_chars` characters
    pub fn for_sms(&self, max_chars: usize) -> Message {
        Message {
            subject: self.subject.clone(),
            body: format!(
                "{}\n\n{}",
                self.subject,
                truncate_chars(&self.body, max_chars)
            ),
        }
    }
}

/// Delivers a message to one recipient using the sender account in `mail`
#[async_trait]
pub trait Transport: Send + Sync {
    async fn deliver(
        &self,
        mail: &MailSettings,
        to: &str,
        message: &Message,
    ) -> Result<(), NotificationError>;
}

/// Sends messages to the primary recipient and, best effort, to the SMS gateway
pub struct Notifier<'a, T: Transport + ?Sized> {
    transport: &'a T,
    mail: &'a MailSettings,
    sms_max_chars: usize,
}

impl<'a, T: Transport + ?Sized> Notifier<'a, T> {
    pub fn new(transport: &'a T, mail: &'a MailSettings, sms_max_chars: usize) -> Self {
        Self {
            transport,
            mail,
            sms_max_chars,
        }
    }

    /// Deliver `message`. Only a primary-channel failure is an error; the secondary channel
    /// is attempted after a successful primary delivery and its failure is only logged.
    pub async fn send(&self, message: &Message) -> Result<(), NotificationError> {
        self.transport
            .deliver(self.mail, &self.mail.recipient, message)
            .await?;
        ::log::info!("Email sent: {}", message.subject);

        if let Some(sms_recipient) = &self.mail.sms_recipient {
            let short = message.for_sms(self.sms_max_chars);
            match self.transport.deliver(self.mail, sms_recipient, &short).await {
                Ok(()) => ::log::info!("SMS notification sent"),
                Err(e) => ::log::warn!("Error sending SMS: {}", e),
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    const SMS: &str = "5551234@sms.example.com";

    /// Records deliveries; fails for any recipient listed in `failing`
    #[derive(Default)]
    struct Recorder {
        sent: Mutex<Vec<(String, Message)>>,
        failing: Vec<String>,
    }

    #[async_trait]
    impl Transport for Recorder {
        async fn deliver(
            &self,
            _mail: &MailSettings,
            to: &str,
            message: &Message,
        ) -> Result<(), NotificationError> {
            if self.failing.iter().any(|f| f == to) {
                return Err(NotificationError::Rejected(format!("{to} refused")));
            }
            self.sent
                .lock()
                .unwrap()
                .push((to.to_string(), message.clone()));
            Ok(())
        }
    }

    fn mail(sms: Option<&str>) -> MailSettings {
        MailSettings {
            sender: "me@example.com".to_string(),
            password: "secret".to_string(),
            recipient: "you@example.com".to_string(),
            sms_recipient: sms.map(str::to_string),
        }
    }

    #[test]
    fn test_for_sms_truncates_body_and_keeps_subject() {
        let message = Message::new("Subject", "x".repeat(500));
        let sms = message.for_sms(160);
        assert_eq!(sms.subject, "Subject");
        assert_eq!(sms.body, format!("Subject\n\n{}", "x".repeat(160)));
    }

    #[tokio::test]
    async fn test_primary_only() {
        let transport = Recorder::default();
        let mail = mail(None);
        let message = Message::new("Hello", "Body");

        Notifier::new(&transport, &mail, 160)
            .send(&message)
            .await
            .unwrap();

        let sent = transport.sent.lock().unwrap();
        assert_eq!(*sent, vec![("you@example.com".to_string(), message)]);
    }

    #[tokio::test]
    async fn test_primary_and_sms() {
        let transport = Recorder::default();
        let mail = mail(Some(SMS));
        let message = Message::new("Hello", "b".repeat(300));

        Notifier::new(&transport, &mail, 160)
            .send(&message)
            .await
            .unwrap();

        let sent = transport.sent.lock().unwrap();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[1].0, SMS);
        assert_eq!(sent[1].1.subject, "Hello");
        assert_eq!(sent[1].1.body.chars().count(), "Hello\n\n".len() + 160);
    }

    #[tokio::test]
    async fn test_sms_failure_does_not_fail_send() {
        let transport = Recorder {
            failing: vec![SMS.to_string()],
            ..Recorder::default()
        };
        let mail = mail(Some(SMS));

        let result = Notifier::new(&transport, &mail, 160)
            .send(&Message::new("Hello", "Body"))
            .await;

        assert!(result.is_ok());
        assert_eq!(transport.sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_primary_failure_is_error_and_skips_sms() {
        let transport = Recorder {
            failing: vec!["you@example.com".to_string()],
            ..Recorder::default()
        };
        let mail = mail(Some(SMS));

        let result = Notifier::new(&transport, &mail, 160)
            .send(&Message::new("Hello", "Body"))
            .await;

        assert!(matches!(result, Err(NotificationError::Rejected(_))));
        assert!(transport.sent.lock().unwrap().is_empty());
    }
}
