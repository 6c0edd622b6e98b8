use std::collections::HashMap;

use crate::symbol::Symbol;

const WRITE_BIT: u32 = 1 << 31;

pub const MAX_SLOTS: usize = (WRITE_BIT - 1) as usize;

// tag bit in the MSB, ValueStore index in the low 31 bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotRef(u32);

impl SlotRef {
    pub fn read(index: u32) -> Self {
        Self(index)
    }

    pub fn write(index: u32) -> Self {
        Self(index | WRITE_BIT)
    }

    pub fn index(&self) -> usize {
        (self.0 & !WRITE_BIT) as _
    }

    pub fn is_write_alias(&self) -> bool {
        self.0 & WRITE_BIT != 0
    }
}

#[derive(Debug, Default)]
pub struct SlotIndex {
    entries: HashMap<Symbol, SlotRef>,
}

impl SlotIndex {
    pub fn lookup(&self, name: Symbol) -> Option<SlotRef> {
        self.entries.get(&name).copied()
    }

    pub fn insert(&mut self, name: Symbol, slot: SlotRef) {
        self.entries.insert(name, slot);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // no iteration-order guarantee beyond the underlying map's
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, SlotRef)> + '_ {
        self.entries.iter().map(|(&name, &slot)| (name, slot))
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display(fmt = "slot limit reached: at most {limit} attributes per instance")]
pub struct SlotLimitError {
    pub limit: usize,
}

#[derive(Debug)]
pub struct ValueStore<V> {
    values: Vec<V>,
}

impl<V> Default for ValueStore<V> {
    fn default() -> Self {
        Self { values: Vec::new() }
    }
}

impl<V> ValueStore<V> {
    pub fn push(&mut self, value: V) -> anyhow::Result<u32> {
        if self.values.len() >= MAX_SLOTS {
            anyhow::bail!(SlotLimitError { limit: MAX_SLOTS })
        }
        let index = self.values.len() as u32;
        self.values.push(value);
        Ok(index)
    }

    // indices come from SlotIndex; anything out of range is an internal
    // invariant breach and panics
    pub fn get(&self, index: usize) -> &V {
        &self.values[index]
    }

    pub fn set(&mut self, index: usize, value: V) {
        self.values[index] = value
    }
}
