//! Diagnostic breadcrumbs attached to failures.
//!
//! A [`Trace`] records the checkpoints an error passed through, earliest
//! first. It never influences which branch a combinator takes.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

/// A single checkpoint tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TraceEntry {
    pub id: Cow<'static, str>,
}

impl TraceEntry {
    pub fn new(id: impl Into<Cow<'static, str>>) -> Self {
        Self { id: id.into() }
    }
}

impl From<&'static str> for TraceEntry {
    fn from(id: &'static str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TraceEntry {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// Ordered, immutable list of [`TraceEntry`] values.
///
/// Every operation returns a new `Trace`; an existing one is never modified.
///
/// ```rust
/// use outcome::Trace;
///
/// let trace = Trace::new().with("load").with("parse");
/// assert_eq!(trace.to_string(), "load > parse");
///
/// let inherited = trace.inherit(&Trace::new().with("retry"));
/// assert_eq!(inherited.to_string(), "load > parse > retry");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Trace(SmallVec<[TraceEntry; 4]>);

impl Trace {
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    /// Returns a new trace with `entry` appended.
    #[must_use]
    pub fn with(&self, entry: impl Into<TraceEntry>) -> Self {
        let mut entries = self.0.clone();
        entries.push(entry.into());
        Self(entries)
    }

    /// Returns `self` followed by `later`, preserving causal order.
    #[must_use]
    pub fn inherit(&self, later: &Trace) -> Self {
        if self.is_empty() {
            return later.clone();
        }
        let mut entries = self.0.clone();
        entries.extend(later.0.iter().cloned());
        Self(entries)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TraceEntry> {
        self.0.iter()
    }

    /// Tags in order, as string slices.
    pub fn ids(&self) -> Vec<&str> {
        self.0.iter().map(|entry| entry.id.as_ref()).collect()
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, entry) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(" > ")?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}

impl<T: Into<TraceEntry>> FromIterator<T> for Trace {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_leaves_original_untouched() {
        let base = Trace::new().with("a");
        let extended = base.with("b");

        assert_eq!(base.ids(), vec!["a"]);
        assert_eq!(extended.ids(), vec!["a", "b"]);
    }

    #[test]
    fn test_inherit_puts_prefix_first() {
        let earlier: Trace = ["first", "second"].into_iter().collect();
        let later: Trace = ["third"].into_iter().collect();

        assert_eq!(earlier.inherit(&later).ids(), vec!["first", "second", "third"]);
        assert_eq!(Trace::new().inherit(&later), later);
        assert_eq!(later.inherit(&Trace::new()), later);
    }

    #[test]
    fn test_owned_tags() {
        let trace = Trace::new().with(format!("attempt-{}", 2));
        assert_eq!(trace.len(), 1);
        assert_eq!(trace.to_string(), "attempt-2");
    }
}
