use std::backtrace::Backtrace;
pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("slots and options must both be positive (got slots={slots}, options={options})")]
    InvalidDimensions { slots: usize, options: usize },

    #[error("guess has {got} values but the game is played over {expected} slots")]
    GuessLength { expected: usize, got: usize },

    #[error("value {value} at slot {slot} is outside the alphabet [0, {options})")]
    ValueOutOfRange {
        slot: usize,
        value: usize,
        options: usize,
    },

    #[error("feedback (bulls={bulls}, cows={cows}) cannot arise from a {slots}-slot game")]
    FeedbackOutOfRange {
        bulls: usize,
        cows: usize,
        slots: usize,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Inner: {inner}\n{backtrace}")]
    Inner {
        inner: Box<SolverError>,
        backtrace: Box<Backtrace>,
    },
}

impl From<SolverError> for Error {
    fn from(inner: SolverError) -> Self {
        Error::Inner {
            inner: Box::new(inner),
            backtrace: Box::new(std::backtrace::Backtrace::capture()),
        }
    }
}
