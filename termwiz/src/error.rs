//! Error types.
use thiserror::Error;

/// Convenient return type for functions.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Generic I/O error.
    #[error("i/o: {0}")]
    Io(#[from] std::io::Error),

    /// Generic formatting error.
    #[error("formatting: {0}")]
    Fmt(#[from] std::fmt::Error),

    /// Regex error.
    #[error("regex: {0}")]
    Regex(#[from] fancy_regex::Error),

    /// UTF-8 decoding error.
    #[error("utf-8 decode: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// State reached that should be impossible.
    #[error("impossible!?: {0}")]
    ImpossibleState(&'static str),

    /// Wrapped OSC error.
    #[error("osc: {0}")]
    Osc(#[from] crate::escape::osc::OscError),

    /// Catch-all for `ensure!`/`format_err!` call sites and ad-hoc
    /// context messages; carries a plain description with no inner cause.
    #[error("{0}")]
    General(String),
}

/// Mirrors `anyhow::Context`: attaches a short, static description to
/// an error as it is propagated, without needing a dedicated variant
/// for every call site.
pub trait Context<T> {
    fn context(self, msg: &str) -> Result<T>;
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E> Context<T> for std::result::Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> Result<T> {
        self.map_err(|e| Error::General(format!("{}: {}", msg, e)))
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| Error::General(format!("{}: {}", f(), e)))
    }
}

impl<T> Context<T> for Option<T> {
    fn context(self, msg: &str) -> Result<T> {
        self.ok_or_else(|| Error::General(msg.to_string()))
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.ok_or_else(|| Error::General(f()))
    }
}

/// Build an `Error::General` from a format string, analogous to
/// `anyhow::format_err!`.
#[macro_export]
macro_rules! format_err {
    ($($arg:tt)*) => {
        $crate::Error::General(format!($($arg)*))
    };
}

/// Bail out of the current function with an `Error::General` unless
/// the condition holds, analogous to `anyhow::ensure!`.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)*) => {
        if !($cond) {
            return Err($crate::format_err!($($arg)*));
        }
    };
}
