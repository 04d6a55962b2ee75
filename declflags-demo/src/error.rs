use declflags::Errors;

/// The command line was unusable.
#[derive(Debug, thiserror::Error)]
pub enum UsageError {
    #[error("Invalid arguments:\n{0}")]
    InvalidArguments(Errors),

    #[error("{program} doesn't take any argument (got {args:?})")]
    UnexpectedArguments { program: String, args: Vec<String> },
}
