/// One resumption of a [`Delegation`](crate::Delegation): either suspended
/// with a value for the driver, or completed with the delegated payload.
///
/// # Examples
///
/// ```rust
/// use outcome::{err, ok, Delegate, Delegation, Outcome, Step};
///
/// let mut completes = ok::<i32, &str>(1).delegation();
/// assert_eq!(completes.resume(), Step::Complete(1));
///
/// let mut suspends = err::<i32, _>("stop").delegation();
/// assert!(suspends.resume().is_yielded());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step<Y, D> {
    /// Suspended, handing `Y` back to the driver
    Yielded(Y),
    /// Finished with the payload
    Complete(D),
}

impl<Y, D> Step<Y, D> {
    /// Returns `true` if the step is `Yielded`.
    #[inline]
    pub const fn is_yielded(&self) -> bool {
        matches!(self, Step::Yielded(_))
    }

    /// Returns `true` if the step is `Complete`.
    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Step::Complete(_))
    }

    /// Maps the suspended value, leaving a completion untouched.
    ///
    /// ```rust
    /// use outcome::Step;
    ///
    /// let y: Step<i32, &str> = Step::Yielded(2);
    /// assert_eq!(y.map_yielded(|v| v * 2), Step::Yielded(4));
    /// ```
    #[inline]
    pub fn map_yielded<Y2, F>(self, f: F) -> Step<Y2, D>
    where
        F: FnOnce(Y) -> Y2,
    {
        match self {
            Step::Yielded(y) => Step::Yielded(f(y)),
            Step::Complete(d) => Step::Complete(d),
        }
    }

    /// Converts into a std `Result`, with a suspension on the `Err` side.
    ///
    /// This is the shape `?` works with inside a delegation body.
    #[inline]
    pub fn into_result(self) -> Result<D, Y> {
        match self {
            Step::Yielded(y) => Err(y),
            Step::Complete(d) => Ok(d),
        }
    }
}
