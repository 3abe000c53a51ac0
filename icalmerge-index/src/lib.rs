//! Identifier index for icalmerge.
//!
//! [`IdentifierIndex`] maps a string identifier to the record that currently
//! owns it. It is a flat open-addressing table with linear probing whose
//! capacity is fixed when it is created: the requested size is rounded up to
//! a prime and the table is never rehashed. Running out of room is reported
//! as [`IndexError::TableFull`] rather than handled by growing.
//!
//! Entries remember the order in which their identifiers were first stored.
//! Overwriting an entry replaces its record in place and keeps that position,
//! so iteration always yields entries in first-seen order.

mod error;
mod hash;
mod table;

pub use error::{IndexError, IndexResult};
pub use hash::{djb2, table_size};
pub use table::{IdentifierIndex, Probe};
