use thiserror::Error;

#[derive(Error, Debug)]
pub enum AiError {
    #[error("No API key configured - set GEMINI_API_KEY")]
    MissingKey,

    #[error("AI service returned status {0}")]
    Http(u16),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("AI service returned no text")]
    Empty,
}
