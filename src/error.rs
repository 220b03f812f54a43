use thiserror::Error;

pub const UNKNOWN_ERROR: &str = "Erro desconhecido";
pub const NETWORK_ERROR: &str = "Falha de comunicação com o servidor";
pub const DECODE_ERROR: &str = "Resposta inválida do servidor";

/// Errors raised by API mutations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP status {status}")]
    Status { status: u16, detail: Option<String> },

    #[error("Parse error: {0}")]
    Decode(String),

    #[error("Request build error: {0}")]
    Request(String),
}

impl ApiError {
    /// Message shown to the user: the server's `detail` when it sent one.
    /// Transport text stays in the log.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { detail, .. } => {
                detail.clone().unwrap_or_else(|| UNKNOWN_ERROR.to_string())
            }
            ApiError::Network(_) => NETWORK_ERROR.to_string(),
            ApiError::Decode(_) => DECODE_ERROR.to_string(),
            ApiError::Request(_) => UNKNOWN_ERROR.to_string(),
        }
    }
}

/// Client-side validation failures on the add/edit forms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("O nome é obrigatório.")]
    MissingName,

    #[error("Valor inválido: {0}")]
    InvalidAmount(String),

    #[error("Número de parcelas inválido: {0}")]
    InvalidInstallments(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Create,
    Update,
    Delete,
}

impl Action {
    fn verb(self) -> &'static str {
        match self {
            Action::Create => "adicionar",
            Action::Update => "atualizar",
            Action::Delete => "deletar",
        }
    }
}

impl ActionError {
    /// Text for the blocking alert, e.g. `Erro ao adicionar: Saída não encontrada`.
    pub fn alert_text(&self, action: Action) -> String {
        let detail = match self {
            ActionError::Form(err) => err.to_string(),
            ActionError::Api(err) => err.user_message(),
        };
        format!("Erro ao {}: {}", action.verb(), detail)
    }
}
