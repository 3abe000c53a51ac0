//! The open-addressing table behind [`IdentifierIndex`].

use std::fmt;
use std::mem;

use crate::error::{IndexError, IndexResult};
use crate::hash::{djb2, table_size};

/// A physical slot in the table.
enum Slot<R> {
    Empty,
    Occupied {
        key: String,
        record: R,
        /// Insertion position of this entry (index into `slot_of_order`).
        order: usize,
    },
}

/// Outcome of probing the table for an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    /// The identifier is stored in this slot.
    Hit(usize),
    /// The identifier is absent; this is the slot it would be stored in.
    Vacant(usize),
    /// The identifier is absent and there is no free slot left.
    Full,
}

/// Fixed-capacity map from identifier to an owned record.
///
/// Collisions are resolved by linear probing from the DJB2 home slot.
/// Nothing is ever removed: a stored identifier keeps its slot and its
/// insertion position for the lifetime of the index, and only its record
/// can be replaced.
pub struct IdentifierIndex<R> {
    slots: Vec<Slot<R>>,
    /// `slot_of_order[k]` is the slot holding the k-th identifier stored.
    slot_of_order: Vec<usize>,
}

impl<R> IdentifierIndex<R> {
    /// Creates an index able to hold at least `capacity_hint` identifiers.
    ///
    /// The actual capacity is the next prime at or above the next odd
    /// number at or above the hint (and never less than 3).
    pub fn with_capacity(capacity_hint: usize) -> IndexResult<Self> {
        let capacity_error = || IndexError::Capacity {
            requested: capacity_hint,
        };

        // Reserve before searching for a prime so absurd sizes fail fast.
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity_hint)
            .map_err(|_| capacity_error())?;

        let capacity = table_size(capacity_hint).ok_or_else(capacity_error)?;
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| capacity_error())?;
        slots.resize_with(capacity, || Slot::Empty);

        let mut slot_of_order = Vec::new();
        slot_of_order
            .try_reserve_exact(capacity)
            .map_err(|_| capacity_error())?;

        Ok(Self {
            slots,
            slot_of_order,
        })
    }

    /// Number of slots. Fixed for the lifetime of the index.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of distinct identifiers stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slot_of_order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slot_of_order.is_empty()
    }

    /// Returns true if no further distinct identifier can be stored.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    fn home_slot(&self, identifier: &str) -> usize {
        (djb2(identifier) % self.slots.len() as u64) as usize
    }

    /// Locates the slot that holds `identifier`, or the free slot it would
    /// be stored in.
    ///
    /// Probes `home, home + 1, ...` modulo the capacity and stops at the
    /// first matching or empty slot. Coming back round to the home slot
    /// means every slot is taken by another identifier.
    #[must_use]
    pub fn insert_or_get_slot(&self, identifier: &str) -> Probe {
        let capacity = self.slots.len();
        let start = self.home_slot(identifier);
        let mut idx = start;
        loop {
            match &self.slots[idx] {
                Slot::Occupied { key, .. } if key == identifier => return Probe::Hit(idx),
                Slot::Empty => return Probe::Vacant(idx),
                Slot::Occupied { .. } => {
                    idx = (idx + 1) % capacity;
                    if idx == start {
                        return Probe::Full;
                    }
                }
            }
        }
    }

    /// Returns the record stored under `identifier`.
    #[must_use]
    pub fn find(&self, identifier: &str) -> Option<&R> {
        match self.insert_or_get_slot(identifier) {
            Probe::Hit(idx) => match &self.slots[idx] {
                Slot::Occupied { record, .. } => Some(record),
                Slot::Empty => None,
            },
            Probe::Vacant(_) | Probe::Full => None,
        }
    }

    /// Returns true if `identifier` is stored.
    #[must_use]
    pub fn contains(&self, identifier: &str) -> bool {
        matches!(self.insert_or_get_slot(identifier), Probe::Hit(_))
    }

    /// Returns the insertion position of `identifier`, counting from zero.
    #[must_use]
    pub fn position(&self, identifier: &str) -> Option<usize> {
        match self.insert_or_get_slot(identifier) {
            Probe::Hit(idx) => match &self.slots[idx] {
                Slot::Occupied { order, .. } => Some(*order),
                Slot::Empty => None,
            },
            Probe::Vacant(_) | Probe::Full => None,
        }
    }

    /// Stores `record` under `identifier`.
    ///
    /// A new identifier takes the next insertion position. An identifier
    /// that is already present has its record replaced in place, keeping
    /// its position, and the displaced record is handed back so the caller
    /// decides when it is released.
    pub fn store(&mut self, identifier: &str, record: R) -> IndexResult<Option<R>> {
        match self.insert_or_get_slot(identifier) {
            Probe::Hit(idx) => match &mut self.slots[idx] {
                Slot::Occupied {
                    record: current, ..
                } => Ok(Some(mem::replace(current, record))),
                Slot::Empty => unreachable!("probe hit an empty slot"),
            },
            Probe::Vacant(idx) => {
                let order = self.slot_of_order.len();
                self.slot_of_order.push(idx);
                self.slots[idx] = Slot::Occupied {
                    key: identifier.to_owned(),
                    record,
                    order,
                };
                Ok(None)
            }
            Probe::Full => Err(IndexError::TableFull {
                capacity: self.capacity(),
            }),
        }
    }

    /// Iterates over `(identifier, record)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &R)> + '_ {
        self.slot_of_order
            .iter()
            .filter_map(|&idx| match &self.slots[idx] {
                Slot::Occupied { key, record, .. } => Some((key.as_str(), record)),
                Slot::Empty => None,
            })
    }

    /// Consumes the index, returning `(identifier, record)` pairs in
    /// insertion order.
    #[must_use]
    pub fn into_entries(self) -> Vec<(String, R)> {
        let mut taken: Vec<Option<(String, R)>> = self
            .slots
            .into_iter()
            .map(|slot| match slot {
                Slot::Occupied { key, record, .. } => Some((key, record)),
                Slot::Empty => None,
            })
            .collect();

        self.slot_of_order
            .iter()
            .filter_map(|&idx| taken[idx].take())
            .collect()
    }

    /// Consumes the index, returning the records in insertion order.
    #[must_use]
    pub fn into_records(self) -> Vec<R> {
        self.into_entries()
            .into_iter()
            .map(|(_, record)| record)
            .collect()
    }
}

impl<R> fmt::Debug for IdentifierIndex<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentifierIndex")
            .field("capacity", &self.capacity())
            .field("len", &self.len())
            .finish()
    }
}
