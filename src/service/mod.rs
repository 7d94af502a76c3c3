//! Units of work against the store: field validation plus one
//! read-then-write sequence per request, committed as one transaction.

pub mod activities;
pub mod campers;
pub mod signups;
pub mod validation;
