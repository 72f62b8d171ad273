//! [`Handler`] abstractions.

use std::future::Future;

/// Executable handler.
///
/// Every asynchronous operation in the workspace is expressed through this
/// trait: the [`Args`] type names the operation, while [`Ok`] and [`Err`]
/// describe its outcome.
///
/// [`Args`]: Handler#generic-parameters
/// [`Err`]: Handler::Err
/// [`Ok`]: Handler::Ok
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    fn execute(
        &self,
        args: Args,
    ) -> impl Future<Output = Result<Self::Ok, Self::Err>>;
}

impl<H, Args> Handler<Args> for &H
where
    H: Handler<Args> + ?Sized,
{
    type Ok = H::Ok;
    type Err = H::Err;

    fn execute(
        &self,
        args: Args,
    ) -> impl Future<Output = Result<Self::Ok, Self::Err>> {
        (**self).execute(args)
    }
}
