//! Describe documents for the objects used across tests.

use forcemap::{RawSchema, StaticSource};

pub const CONTACT: &str = include_str!("../fixtures/contact.json");
pub const OPPORTUNITY: &str = include_str!("../fixtures/opportunity.json");
pub const ACCOUNT: &str = include_str!("../fixtures/account.json");

pub fn raw(json: &str) -> RawSchema {
    RawSchema::from_json(json).unwrap()
}

/// A schema source knowing `Contact`, `Opportunity` and `Account`.
pub fn source() -> StaticSource {
    StaticSource::new()
        .with(raw(CONTACT))
        .with(raw(OPPORTUNITY))
        .with(raw(ACCOUNT))
}
