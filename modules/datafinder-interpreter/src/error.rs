use thiserror::Error;

pub type Result<T> = std::result::Result<T, InterpreterError>;

#[derive(Debug, Error)]
pub enum InterpreterError {
    #[error("Language model load failed: {0}")]
    ModelLoad(String),
}
