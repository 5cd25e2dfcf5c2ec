/// Allows any Sized type to be wrapped in a Result without the extra noise of Ok(...) or Err(...)
/// at the end of a long chain of calls.
pub trait ResultExtensions
where
    Self: Sized,
{
    fn to_ok<E>(self) -> Result<Self, E> {
        Ok(self)
    }

    fn to_err<T>(self) -> Result<T, Self> {
        Err(self)
    }
}
impl<T> ResultExtensions for T {}
