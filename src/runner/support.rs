#[derive(Debug, Copy)]
#[doc(hidden)]
pub struct HListIterator<'a, Inner: ?Sized>(pub &'a Inner);

impl<'a, T: ?Sized> Clone for HListIterator<'a, T> {
    fn clone(&self) -> Self {
        Self(<&T>::clone(&self.0))
    }
}

/// Pushes `T` onto the _end_ of a `(Head, (.., ()))` list so that things run
/// in the order they were added.
#[doc(hidden)]
pub trait Append<T> {
    type Output;

    fn append(self, item: T) -> Self::Output;
}

impl<T> Append<T> for () {
    type Output = (T, ());

    fn append(self, item: T) -> (T, ()) {
        (item, ())
    }
}

impl<T, Head, Rest: Append<T>> Append<T> for (Head, Rest) {
    type Output = (Head, Rest::Output);

    fn append(self, item: T) -> Self::Output {
        (self.0, self.1.append(item))
    }
}

// Inputs and results go through this so the optimizer can't see that the
// result of a benchmark is discarded.
pub use core::hint::black_box;
