use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid argument: `{parameter}` must not be empty or whitespace")]
    InvalidArgument { parameter: &'static str },
}
