//! Day option combinations

use smallvec::{SmallVec, smallvec};

/// Option indices chosen for each day, day 1 first.
pub type Choices = SmallVec<[usize; 8]>;

/// Iterates the Cartesian product of option indices over a fixed number of days.
///
/// Works like an odometer: the last day turns fastest, so day 1 is the outermost slot and every
/// slot counts upwards from `0`. For `days = 3` and `options = 5` this yields `[0, 0, 0]`,
/// `[0, 0, 1]`, ... `[4, 4, 4]`, 125 combinations in total.
#[derive(Debug, Clone)]
pub struct Combinations {
    options: usize,
    next: Option<Choices>,
}

impl Combinations {
    /// Creates an iterator over `options ^ days` combinations.
    ///
    /// Yields nothing when there are no options; yields one empty combination when there are no days.
    pub fn new(days: usize, options: usize) -> Self {
        let next = (options > 0).then(|| smallvec![0; days]);

        Self { options, next }
    }
}

impl Iterator for Combinations {
    type Item = Choices;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        let mut following = current.clone();

        // Increment from the last slot, carrying into earlier ones.
        for slot in following.iter_mut().rev() {
            *slot += 1;

            if *slot < self.options {
                self.next = Some(following);
                break;
            }

            *slot = 0;
        }

        Some(current)
    }
}
