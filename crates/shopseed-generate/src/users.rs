use std::collections::{BTreeSet, HashSet};

use rand::{Rng, RngCore};
use tracing::warn;

use crate::errors::GenerationError;
use crate::model::UserRecord;
use crate::pools::{AREA_CODES, GIVEN_NAMES, SURNAMES, pick};

type NameKey = (&'static str, &'static str, String);

/// Lazy generator of users with unique (title, first name, surname) triples.
///
/// Ids are assigned densely from 1 as records are accepted. Once all records
/// have been yielded, or a record exhausts its attempts, the iterator is done.
#[derive(Debug)]
pub struct UserGenerator<R> {
    rng: R,
    remaining: u64,
    next_id: i64,
    max_attempts: u32,
    seen: HashSet<NameKey>,
    failed: bool,
}

impl<R: RngCore> UserGenerator<R> {
    /// Fails up front when `count` exceeds the distinct name combinations.
    pub fn new(count: u64, max_attempts: u32, rng: R) -> Result<Self, GenerationError> {
        let available = distinct_name_count();
        if count > available {
            return Err(GenerationError::InsufficientNames {
                requested: count,
                available,
            });
        }

        Ok(Self {
            rng,
            remaining: count,
            next_id: 1,
            max_attempts: max_attempts.max(1),
            seen: HashSet::new(),
            failed: false,
        })
    }

    fn sample(&mut self) -> (NameKey, &'static str, String) {
        let given = *pick(GIVEN_NAMES, &mut self.rng);
        let surname = fix_surname(*pick(SURNAMES, &mut self.rng));
        let area = pick(AREA_CODES, &mut self.rng);
        let number = self.rng.random_range(100_000..999_999);
        (
            (given.title, given.name, surname),
            given.gender,
            format!("{area}{number}"),
        )
    }
}

impl<R: RngCore> Iterator for UserGenerator<R> {
    type Item = Result<UserRecord, GenerationError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 || self.failed {
            return None;
        }

        for _ in 0..self.max_attempts {
            let (key, gender, contact_number) = self.sample();
            if self.seen.contains(&key) {
                continue;
            }

            let (title, first_name, surname) = key.clone();
            self.seen.insert(key);
            let record = UserRecord {
                id: self.next_id,
                title: title.to_string(),
                first_name: first_name.to_string(),
                surname,
                gender: gender.to_string(),
                contact_number,
            };
            self.next_id += 1;
            self.remaining -= 1;
            return Some(Ok(record));
        }

        self.failed = true;
        let generated = self.seen.len() as u64;
        warn!(
            attempts = self.max_attempts,
            generated, "user generation exhausted retries"
        );
        Some(Err(GenerationError::RetriesExhausted {
            attempts: self.max_attempts,
            generated,
        }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        let remaining = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

/// Collapse runs of three `f`s into two.
pub fn fix_surname(surname: &str) -> String {
    surname.replace("fff", "ff")
}

/// Number of distinct (title, first name, surname) triples the pools can yield.
pub fn distinct_name_count() -> u64 {
    let given: BTreeSet<(&str, &str)> = GIVEN_NAMES
        .iter()
        .map(|given| (given.title, given.name))
        .collect();
    let surnames: BTreeSet<String> = SURNAMES.iter().map(|s| fix_surname(s)).collect();
    (given.len() * surnames.len()) as u64
}
