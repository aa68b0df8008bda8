//! Two-variant convenience layer over the general split test.

use crate::split_test::Builder;

/// Start configuring an A/B test: a [`SplitTest`](crate::SplitTest) with
/// exactly two groups.
///
/// [`user_group`](crate::SplitTest::user_group) on the built test yields
/// `0` (not involved), `1`, or `2`. Eligibility, exposure, hooks, and
/// storage all go through the general builder, unchanged.
///
/// ```
/// use cohort::{ab_test, MemoryStorage};
///
/// # fn main() -> Result<(), cohort::ConfigError> {
/// let storage = MemoryStorage::new();
/// let test = ab_test("new_onboarding").exposure(0.25).build(&storage)?;
/// assert!(test.user_group() <= 2);
/// # Ok(())
/// # }
/// ```
pub fn ab_test(name: impl Into<String>) -> Builder {
    Builder::new(name, 2)
}

#[cfg(test)]
mod tests {
    use crate::storage::MemoryStorage;

    use super::*;

    #[test]
    fn fixes_the_group_count_to_two() {
        let storage = MemoryStorage::new();
        let test = ab_test("test").build(&storage).unwrap();

        assert_eq!(test.group_count(), 2);
    }
}
