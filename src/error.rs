use std::backtrace::Backtrace;
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Rejection reasons for malformed board input.
///
/// These are raised at [`Board`](crate::board::Board) construction time and
/// never from inside the solver; a board that constructs successfully
/// satisfies every structural invariant the solver relies on.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board size must be positive")]
    ZeroSize,
    #[error("board size {size} exceeds the supported maximum of {}", crate::board::MAX_SIZE)]
    TooLarge { size: usize },
    #[error("expected {expected} cells, got {actual}")]
    CellCountMismatch { expected: usize, actual: usize },
    #[error("expected exactly {expected} regions, found {actual}")]
    RegionCountMismatch { expected: usize, actual: usize },
    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum SolveError {
    #[error(transparent)]
    Board(#[from] BoardError),
    /// The search handed back a state with a non-singleton row domain.
    #[error("search produced a state with unassigned rows")]
    IncompleteAssignment,
    /// The search handed back a placement the independent validator rejects.
    #[error("search produced a placement that fails independent validation")]
    FailedValidation,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Inner: {inner}\n{backtrace}")]
    Inner {
        inner: Box<SolveError>,
        backtrace: Box<Backtrace>,
    },
}

impl From<SolveError> for Error {
    fn from(inner: SolveError) -> Self {
        Error::Inner {
            inner: Box::new(inner),
            backtrace: Box::new(std::backtrace::Backtrace::capture()),
        }
    }
}

impl From<BoardError> for Error {
    fn from(inner: BoardError) -> Self {
        SolveError::Board(inner).into()
    }
}
