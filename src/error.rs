use thiserror::Error;

/// Raised when the peer of an interactive session (or a batch input file)
/// does not follow the token protocol.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("invalid token {token:?}, expected {expected}")]
    InvalidToken {
        token: String,
        expected: &'static str,
    },
    #[error("vertex {vertex} is out of range 1..={n}")]
    VertexOutOfRange { vertex: usize, n: usize },
    #[error("session already terminated")]
    SessionClosed,
    #[error("unexpected response from judge: {0:?}")]
    UnexpectedResponse(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Raised when a rejection-sampling loop runs out of attempts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SamplingError {
    #[error("gave up after {attempts} attempts")]
    AttemptsExhausted { attempts: usize },
}
