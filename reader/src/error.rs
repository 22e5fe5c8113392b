use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum ReadError {
    /// Graceful end of input, not a fault
    #[error("end of stream")]
    Eos,
}

pub type ReadResult<T> = Result<T, ReadError>;
