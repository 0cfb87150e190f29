use chrono::{Duration, NaiveDateTime, SubsecRound};
use rand::{Rng, RngCore};

use crate::errors::GenerationError;
use crate::model::PurchaseRecord;
use crate::pools::{CATEGORIES, PRIMARY_ITEMS, SECONDARY_ITEMS, pick};

/// Lazy generator of exactly `count` purchases. Duplicates are allowed.
///
/// Purchases reference user ids in `[1, user_count)`: the highest generated
/// user id is never referenced.
#[derive(Debug)]
pub struct PurchaseGenerator<R> {
    rng: R,
    count: u64,
    produced: u64,
    user_count: u64,
    now: NaiveDateTime,
}

impl<R: RngCore> PurchaseGenerator<R> {
    /// `now` is truncated to microseconds so dates survive storage unchanged.
    pub fn new(
        count: u64,
        user_count: u64,
        now: NaiveDateTime,
        rng: R,
    ) -> Result<Self, GenerationError> {
        if count > 0 && user_count < 2 {
            return Err(GenerationError::NoReferencableUsers { user_count });
        }

        Ok(Self {
            rng,
            count,
            produced: 0,
            user_count,
            now: now.trunc_subsecs(6),
        })
    }
}

impl<R: RngCore> Iterator for PurchaseGenerator<R> {
    type Item = PurchaseRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.produced >= self.count {
            return None;
        }

        let user_id = self.rng.random_range(1..self.user_count) as i64;
        let item = format!(
            "{} {}",
            pick(PRIMARY_ITEMS, &mut self.rng),
            pick(SECONDARY_ITEMS, &mut self.rng)
        );
        let spend: i64 = self.rng.random_range(1..=99);
        let days: i64 = self.rng.random_range(1..=365);
        let category = pick(CATEGORIES, &mut self.rng).to_string();

        self.produced += 1;
        Some(PurchaseRecord {
            id: self.produced as i64,
            user_id,
            category,
            item,
            date: self.now - Duration::days(days),
            price: spend * 100,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.count - self.produced).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl<R: RngCore> ExactSizeIterator for PurchaseGenerator<R> {}
