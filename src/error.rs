//! Error type shared by the API client, the session store and the form screens.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// Client-side check failed; nothing was sent
    #[error("{0}")]
    Validation(String),

    /// Request never got a response
    #[error("Erro de rede: {0}")]
    Network(String),

    /// Server answered with a non-success status
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Postal-code lookup found nothing
    #[error("{0}")]
    NotFound(String),

    #[error("Resposta inválida: {0}")]
    Parse(String),

    #[error("Erro de armazenamento: {0}")]
    Storage(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }

    /// Transport failures and non-2xx answers are handled the same way by the screens
    pub fn is_network(&self) -> bool {
        matches!(self, AppError::Network(_) | AppError::Status { .. })
    }

    /// Text for a notification, prefixed with what the user was trying to do
    pub fn user_message(&self, context: &str) -> String {
        match self {
            AppError::Validation(msg) | AppError::NotFound(msg) => msg.clone(),
            AppError::Status { message, .. } if !message.is_empty() => {
                format!("{}: {}", context, message)
            }
            other => format!("{}: {}", context, other),
        }
    }
}

impl From<gloo_net::Error> for AppError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => AppError::Parse(e.to_string()),
            other => AppError::Network(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_counts_as_network() {
        let err = AppError::Status { status: 503, message: "indisponível".to_string() };
        assert!(err.is_network());
        assert!(AppError::Network("timeout".into()).is_network());
        assert!(!AppError::validation("x").is_network());
        assert!(!AppError::NotFound("CEP não encontrado.".into()).is_network());
    }

    #[test]
    fn test_user_message() {
        let err = AppError::validation("As senhas não coincidem.");
        assert_eq!(err.user_message("Erro ao registrar"), "As senhas não coincidem.");

        let err = AppError::Status { status: 401, message: "Senha incorreta".into() };
        assert_eq!(err.user_message("Erro ao fazer login"), "Erro ao fazer login: Senha incorreta");

        let err = AppError::Network("failed to fetch".into());
        assert_eq!(
            err.user_message("Erro ao carregar mensagens"),
            "Erro ao carregar mensagens: Erro de rede: failed to fetch"
        );
    }
}
