use std::fmt::{Debug, Formatter};

/// Wraps a closure so it can be passed where a [`Debug`] value is expected.
pub struct FormatDebugWith<F>(pub F)
where
    F: Fn(&mut Formatter<'_>) -> std::fmt::Result;

impl<F> Debug for FormatDebugWith<F>
where
    F: Fn(&mut Formatter<'_>) -> std::fmt::Result,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        (self.0)(f)
    }
}

/// Debug-formats a string without quotes.
pub struct FormatDebugAs(pub String);

impl Debug for FormatDebugAs {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The value of a pair that is not the one asked about, tagged with the
/// position it was found in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OtherValue<T> {
    /// The given value was the second element; this is the first.
    First(T),
    /// The given value was the first element; this is the second.
    Second(T),
    /// Both elements equal the given value.
    Both(T),
}

impl<T> OtherValue<T> {
    pub fn into_inner(self) -> T {
        match self {
            OtherValue::First(value) | OtherValue::Second(value) | OtherValue::Both(value) => {
                value
            }
        }
    }
}

/// Given a pair and one of its values, returns the other value.  Returns
/// `None` if `value` is in neither position.
pub fn other_value<T: Eq>((first, second): (T, T), value: &T) -> Option<OtherValue<T>> {
    match (first == *value, second == *value) {
        (true, true) => Some(OtherValue::Both(second)),
        (true, false) => Some(OtherValue::Second(second)),
        (false, true) => Some(OtherValue::First(first)),
        (false, false) => None,
    }
}
