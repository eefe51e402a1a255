//! Document metadata: title, authors, dates and custom key/value pairs.

use chrono::NaiveDate;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Metadata {
    pub title: Option<String>,
    /// Authors in declared order.
    pub authors: Vec<Author>,
    pub date: Option<DateStamp>,
    /// Custom entries, unique by key.
    pub custom: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Author {
    pub name: String,
    pub id: Option<String>,
}

/// Calendar dates only; the format carries no time component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateStamp {
    pub created: Option<NaiveDate>,
    pub modified: Option<NaiveDate>,
}
