/// Decides whether an element of a sequence is the one being looked for
pub trait Matcher<T> {
    fn matches(&self, item: &T) -> bool;
}

/// Matches elements equal to the wrapped value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Equals<T>(pub T);

impl<T: PartialEq> Matcher<T> for Equals<T> {
    fn matches(&self, item: &T) -> bool {
        *item == self.0
    }
}

impl<T, F> Matcher<T> for F
where
    F: Fn(&T) -> bool,
{
    fn matches(&self, item: &T) -> bool {
        self(item)
    }
}

/// Check whether a lazy sequence yields an element accepted by `matcher`
///
/// Elements are pulled one at a time and the search stops at the first match,
/// so nothing after the matching element is ever produced. A finite sequence
/// with no match is drained completely and gives `false`. An infinite sequence
/// with no match never returns.
pub fn generator_contains<I, M>(sequence: I, matcher: M) -> bool
where
    I: IntoIterator,
    M: Matcher<I::Item>,
{
    for item in sequence {
        if matcher.matches(&item) {
            return true;
        }
    }
    false
}

/// Shorthand for `generator_contains(sequence, Equals(value))`
pub fn contains_value<I>(sequence: I, value: I::Item) -> bool
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    generator_contains(sequence, Equals(value))
}
