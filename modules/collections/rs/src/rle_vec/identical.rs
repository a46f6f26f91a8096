/// Decides whether two neighbouring values belong to the same run of a run-length encoding.
pub trait Identical<T> {
    /// No guarantees are made about which of the two values is kept in the run.
    fn identical(&self, first: &T, second: &T) -> bool;
}

impl<T, F> Identical<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn identical(&self, first: &T, second: &T) -> bool {
        self(first, second)
    }
}

/// Values are identical when they are equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Equal;

impl<T: PartialEq> Identical<T> for Equal {
    #[inline]
    fn identical(&self, first: &T, second: &T) -> bool {
        first == second
    }
}
