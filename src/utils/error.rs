use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("Input stream closed before 'stop' was entered")]
    InputClosed,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConsoleError {
    /// Process exit status the binary reports for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConsoleError::InputClosed => 1,
            ConsoleError::IoError(_) => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConsoleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_and_non_zero() {
        let closed = ConsoleError::InputClosed;
        let io = ConsoleError::from(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "pipe closed",
        ));

        assert_eq!(closed.exit_code(), 1);
        assert_eq!(io.exit_code(), 2);
        assert!(io.to_string().contains("pipe closed"));
    }
}
