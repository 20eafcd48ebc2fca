//! Demo contacts
//!
//! Generates sample contacts for trying the application out. Full names are
//! unique within a generated batch so they never trip duplicate detection.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::ContactInfo;

const FIRST_NAMES: &[&str] = &[
    "John", "Jane", "Alice", "Bob", "Charlie", "David", "Eve", "Frank", "Grace", "Hank", "Ivy",
    "Jack", "Kate", "Liam", "Mia", "Noah", "Olivia", "Peter", "Quinn", "Ryan", "Sara", "Tom",
    "Uma", "Vince", "Wendy", "Xander", "Yara", "Zane",
];

const LAST_NAMES: &[&str] = &[
    "Doe", "Smith", "Johnson", "Brown", "Lee", "White", "Black", "Green", "Jones", "King",
    "Adams", "Baker", "Clark", "Davis", "Evans", "Fisher", "Garcia", "Harris", "Irwin", "Klein",
    "Lopez", "Morgan", "Nelson", "Owens", "Perez", "Reed", "Taylor", "Upton", "Vargas", "Xu",
    "Young", "Zhang",
];

const DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "outlook.com",
    "hotmail.com",
    "protonmail.com",
];

const CELL_PREFIXES: &[&str] = &[
    "0151", "0157", "0160", "0170", "0171", "0172", "0173", "0174", "0175", "0176", "0177",
    "0178", "0179",
];

const SUBSCRIBER_DIGITS: usize = 7;

/// Upper bound on distinct full names the pools can produce
pub fn max_demo_contacts() -> usize {
    FIRST_NAMES.len() * LAST_NAMES.len()
}

/// Generate up to `count` fully populated demo descriptors with unique
/// full names, ready for `add_contact`
pub fn generate_demo_contact_infos(count: usize) -> Vec<ContactInfo> {
    let count = count.min(max_demo_contacts());
    let mut rng = rand::thread_rng();
    let mut seen = HashSet::with_capacity(count);
    let mut infos = Vec::with_capacity(count);

    while infos.len() < count {
        let first = FIRST_NAMES.choose(&mut rng).copied().unwrap_or("John");
        let last = LAST_NAMES.choose(&mut rng).copied().unwrap_or("Doe");
        if !seen.insert((first, last)) {
            continue;
        }

        infos.push(
            ContactInfo::full_name(first, last)
                .with_email(random_email(&mut rng, first, last))
                .with_phone(random_phone(&mut rng)),
        );
    }

    infos
}

fn random_email(rng: &mut impl Rng, first: &str, last: &str) -> String {
    let domain = DOMAINS.choose(rng).copied().unwrap_or("gmail.com");
    format!("{}.{}@{}", first.to_lowercase(), last.to_lowercase(), domain)
}

fn random_phone(rng: &mut impl Rng) -> String {
    let prefix = CELL_PREFIXES.choose(rng).copied().unwrap_or("0151");
    let subscriber: String = (0..SUBSCRIBER_DIGITS)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect();
    format!("{} {}", prefix, subscriber)
}
