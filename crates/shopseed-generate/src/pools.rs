//! Fixed word pools the generators sample from.

/// A first name together with the gender and title it is always paired with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GivenName {
    pub name: &'static str,
    pub gender: &'static str,
    pub title: &'static str,
}

const fn given(name: &'static str, gender: &'static str, title: &'static str) -> GivenName {
    GivenName {
        name,
        gender,
        title,
    }
}

pub const GIVEN_NAMES: &[GivenName] = &[
    given("Sandra", "F", "Mrs"),
    given("Nancy", "F", "Prof"),
    given("Byron", "M", "Dr"),
    given("Matthew", "M", "Mr"),
    given("Arty", "M", "Mr"),
    given("Nick", "M", "Mr"),
    given("Linda", "F", "Ms"),
    given("Karen", "F", "Mrs"),
    given("Buzz", "M", "Mr"),
    given("Robert", "M", "Mr"),
    given("Christine", "F", "Ms"),
    given("Robyn", "F", "Ms"),
    given("Paula", "F", "Ms"),
    given("John", "M", "Sir"),
];

pub const SURNAMES: &[&str] = &[
    "Smith",
    "Harrison",
    "Varley",
    "Priestly",
    "Braintree",
    "Macintosh",
    "King",
    "Wood",
    "Hartley",
    "Frank",
    "Smithe",
    "Simpson",
    "Brown",
    "Love",
    "Goodfellow",
    "Banks",
    "Rankin",
    "Buchanon",
    "Mcintyre",
    "Patrick",
    "Taylor",
    "Court",
    "Sampson",
    "Sinclair",
    "Green",
    "Pink",
    "Todd",
    "Walsh",
    "Washington",
    "Goodie",
    "MacDougal",
    "Bush",
    "Newton",
    "Prince",
    "Gooding",
    "Pitt",
    "Sheen",
    "Baldwin",
    "Bosche",
    "Decker",
    "Magnusson",
    "Springfield",
    "Collins",
    "Williams",
    "Evans",
    "Miller",
    "Foster",
    "Gibson",
    "Lewis",
    "Mills",
    "White",
    "Thompson",
    "Rose",
    "Richardson",
    "Chapman",
    "Gordon",
    "Cole",
    "Grant",
    "Dixon",
    "Carr",
    "Scott",
];

/// Phone prefixes; the subscriber number is appended directly.
pub const AREA_CODES: &[&str] = &["07855 ", "(0191) ", "(01904) ", "(0207) 6", "07812 "];

pub const CATEGORIES: &[&str] = &["GARDEN", "ELECTRICAL", "KITCHEN", "HOME"];

pub const PRIMARY_ITEMS: &[&str] = &["Garden", "Electric", "Counter", "Floor", "Door"];

pub const SECONDARY_ITEMS: &[&str] = &["Polisher", "Hoover", "Knife", "Sock", "Wiper"];

pub fn pick<'a, T>(values: &'a [T], rng: &mut impl rand::Rng) -> &'a T {
    &values[rng.random_range(0..values.len())]
}
