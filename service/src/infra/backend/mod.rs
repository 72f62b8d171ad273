//! [`Backend`]-related implementations.

#[cfg(feature = "http")]
pub mod http;

use derive_more::{Display, Error as StdError, From};

#[cfg(feature = "http")]
pub use self::http::Http;

/// Remote room search backend operation.
pub use common::Handler as Backend;

/// [`Backend`] error, meaning the remote call failed or was rejected.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    #[cfg(feature = "http")]
    /// [`Http`] error.
    Http(http::Error),

    /// [`Backend`] rejected to serve a request.
    #[display("`Backend` rejected the request: {_0}")]
    Rejected(#[error(not(source))] String),
}
