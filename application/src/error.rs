//! [`Error`]-related definitions.

use derive_more::{Display, Error as StdError, From};
use service::{infra::backend, InvalidArgument};
use tracerr::Traced;

/// Error of performing a [`Command`].
///
/// [`Command`]: crate::Command
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Provided argument is malformed.
    InvalidArgument(InvalidArgument),

    /// Remote search backend failed.
    #[display("backend failure: {_0}")]
    Backend(Traced<backend::Error>),

    /// Controller settled into a failed state.
    #[display("{_0}")]
    #[from(ignore)]
    Failed(#[error(not(source))] String),
}
