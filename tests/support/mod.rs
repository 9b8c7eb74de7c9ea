//! Shared domain stubs for data proxy tests: a people directory and a
//! version-carrying address book.
#![allow(dead_code)]

use memproxy::{
    numeric_version, InMemoryDataProxy, NextId, Record, VersionedDataProxy, VersionedRecord,
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: i32,
    pub name: String,
}

impl Person {
    /// A person with no identity yet; the store assigns one on insert.
    pub fn named(name: &str) -> Self {
        Person {
            id: 0,
            name: name.to_string(),
        }
    }

    pub fn with_id(id: i32, name: &str) -> Self {
        Person {
            id,
            name: name.to_string(),
        }
    }
}

impl Record for Person {
    type Key = i32;
    const NAME: &'static str = "Person";

    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub id: i32,
    pub street: String,
    pub version: String,
}

impl Address {
    pub fn new(id: i32, street: &str, version: &str) -> Self {
        Address {
            id,
            street: street.to_string(),
            version: version.to_string(),
        }
    }
}

impl Record for Address {
    type Key = i32;
    const NAME: &'static str = "Address";

    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}

impl VersionedRecord for Address {
    fn version(&self) -> &str {
        &self.version
    }

    fn set_version(&mut self, version: String) {
        self.version = version;
    }
}

/// Max existing key plus one; the usual policy for integer keys.
pub fn max_plus_one() -> NextId<i32> {
    Box::new(|keys| keys.iter().max().map_or(1, |max| max + 1))
}

/// Deliberately faulty policy that always hands out the same ID.
pub fn always_one() -> NextId<i32> {
    Box::new(|_keys| 1)
}

/// Person store seeded with three guitarists.
pub fn person_proxy() -> InMemoryDataProxy<Person> {
    InMemoryDataProxy::new(
        vec![
            Person::with_id(1, "Django Reinhardt"),
            Person::with_id(2, "James Page"),
            Person::with_id(3, "Eric Johnson"),
        ],
        max_plus_one(),
    )
    .expect("seed data is valid")
}

/// Address store seeded with one versioned record and a numeric token
/// policy, so each successful update advances the version by one.
pub fn address_proxy() -> VersionedDataProxy<Address> {
    VersionedDataProxy::new(vec![Address::new(1, "123 Main St.", "1")], max_plus_one())
        .expect("seed data is valid")
        .with_increment_version(numeric_version())
}
