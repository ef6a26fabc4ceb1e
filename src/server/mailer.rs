//! Outbound email for registration and confirmation tokens.
//!
//! The service only ever sends short plain-text messages carrying a signed
//! token. Sending is behind the `Mailer` trait so services can be tested
//! with a recording double instead of a live SMTP session.

use async_trait::async_trait;
use lettre::{
    message::Mailbox,
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use thiserror::Error;

use entity::enums::Language;

#[derive(Error, Debug)]
pub enum MailerError {
    /// The recipient address is malformed or was permanently rejected by
    /// the SMTP server. Surfaces to clients as the email-non-existent code.
    #[error("Recipient email does not exist")]
    NonExistentEmail,

    /// Message construction failed.
    #[error("Failed to build email message: {0}")]
    Message(#[from] lettre::error::Error),

    /// Transient or connection-level SMTP failure.
    #[error(transparent)]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Sends a plain-text email.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailerError>;
}

/// Subject and body of the registration verification email.
///
/// Languages without translated copy fall back to English. The body is the
/// bare registration token the client appends to its verify-email request.
pub fn registration_email(lang: Language, token: &str) -> (String, String) {
    let subject = match lang {
        Language::Ru => "Регистрация",
        Language::De => "Registrierung",
        Language::Es => "Registro",
        Language::Fr => "Inscription",
        _ => "Registration",
    };
    (subject.to_string(), token.to_string())
}

/// Subject and body of the change-password confirmation email.
pub fn change_password_email(lang: Language, token: &str) -> (String, String) {
    let subject = match lang {
        Language::Ru => "Смена пароля",
        Language::De => "Passwort ändern",
        Language::Es => "Cambio de contraseña",
        Language::Fr => "Changement de mot de passe",
        _ => "Password change",
    };
    (subject.to_string(), token.to_string())
}

/// Subject and body of the team-deletion confirmation email.
pub fn delete_team_email(lang: Language, token: &str) -> (String, String) {
    let subject = match lang {
        Language::Ru => "Удаление команды",
        Language::De => "Team löschen",
        Language::Es => "Eliminación del equipo",
        Language::Fr => "Suppression de l'équipe",
        _ => "Team deletion",
    };
    (subject.to_string(), token.to_string())
}

/// SMTP-backed mailer over a pooled async transport.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    /// Builds a pooled TLS transport against the given relay.
    pub fn new(
        server: &str,
        port: u16,
        user: &str,
        password: &str,
        from: Mailbox,
    ) -> Result<Self, MailerError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(server)?
            .port(port)
            .credentials(Credentials::new(user.to_string(), password.to_string()))
            .build();

        Ok(Self { transport, from })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailerError> {
        let to: Mailbox = to.parse().map_err(|_| MailerError::NonExistentEmail)?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(subject)
            .body(body.to_string())?;

        self.transport.send(message).await.map_err(|e| {
            // A permanent rejection means the recipient does not exist.
            if e.is_permanent() {
                MailerError::NonExistentEmail
            } else {
                MailerError::Transport(e)
            }
        })?;

        Ok(())
    }
}
