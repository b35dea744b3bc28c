//! Runtime tags for the two variant families.

/// Which sum type a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Outcome,
    Maybe,
}

/// Which case a value is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Ok,
    Err,
    Some,
    None,
}

impl Variant {
    #[inline]
    pub const fn family(self) -> Family {
        match self {
            Variant::Ok | Variant::Err => Family::Outcome,
            Variant::Some | Variant::None => Family::Maybe,
        }
    }
}

/// Values that can report their family and case at runtime.
///
/// ```rust
/// use outcome::{is_maybe, is_outcome, ok, some, Family, Tagged, Variant};
///
/// let value = ok::<i32, ()>(1);
/// assert_eq!(value.variant(), Variant::Ok);
/// assert_eq!(value.family(), Family::Outcome);
/// assert!(is_outcome(&value));
/// assert!(is_maybe(&some(1)));
/// ```
pub trait Tagged {
    fn variant(&self) -> Variant;

    fn family(&self) -> Family {
        self.variant().family()
    }
}

impl<V: Tagged + ?Sized> Tagged for &V {
    fn variant(&self) -> Variant {
        (**self).variant()
    }
}

impl<V: Tagged + ?Sized> Tagged for Box<V> {
    fn variant(&self) -> Variant {
        (**self).variant()
    }
}

pub fn is_outcome<V: Tagged + ?Sized>(value: &V) -> bool {
    value.family() == Family::Outcome
}

pub fn is_maybe<V: Tagged + ?Sized>(value: &V) -> bool {
    value.family() == Family::Maybe
}
