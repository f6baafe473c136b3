use std::{fmt::Debug, hash::Hash};

use derivative::Derivative;

use crate::util::{OtherValue, other_value};

/// The two ends of an edge in the order they were supplied: origin first,
/// destination second.  The order carries no meaning for adjacency in an
/// undirected graph, but it is kept for display and serialization.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "T: Clone"),
    Copy(bound = "T: Copy"),
    Debug(bound = "T: Debug"),
    Hash(bound = "T: Hash"),
    PartialEq(bound = "T: PartialEq"),
    Eq(bound = "T: Eq")
)]
pub struct EdgeEnds<T> {
    data: (T, T),
}

impl<T> EdgeEnds<T> {
    pub fn new(origin: T, destination: T) -> Self {
        Self {
            data: (origin, destination),
        }
    }

    pub fn origin(&self) -> &T {
        &self.data.0
    }

    pub fn destination(&self) -> &T {
        &self.data.1
    }

    pub fn values(&self) -> (&T, &T) {
        (&self.data.0, &self.data.1)
    }

    pub fn into_values(self) -> (T, T) {
        self.data
    }

    /// Checks whether `value` is either end.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Eq,
    {
        self.origin() == value || self.destination() == value
    }

    /// Checks whether the ends are `a` and `b`, in either order.
    pub fn has_both(&self, a: &T, b: &T) -> bool
    where
        T: Eq,
    {
        (self.origin() == a && self.destination() == b)
            || (self.origin() == b && self.destination() == a)
    }

    /// Returns the end opposite to `value`, or `None` if `value` is not an end.
    pub fn other_value<'a>(&'a self, value: &'a T) -> Option<OtherValue<&'a T>>
    where
        T: Eq,
    {
        other_value(self.values(), &value)
    }

    pub fn is_loop(&self) -> bool
    where
        T: Eq,
    {
        self.origin() == self.destination()
    }
}

impl<T> From<(T, T)> for EdgeEnds<T> {
    fn from((origin, destination): (T, T)) -> Self {
        Self::new(origin, destination)
    }
}
