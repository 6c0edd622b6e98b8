use crate::{
    slot::{SlotIndex, SlotRef, ValueStore},
    symbol::{Interner, Symbol},
};

#[derive(Debug)]
pub struct OpenStruct<V> {
    pub(crate) index: SlotIndex,
    pub(crate) values: ValueStore<V>,
}

impl<V> Default for OpenStruct<V> {
    fn default() -> Self {
        Self {
            index: SlotIndex::default(),
            values: ValueStore::default(),
        }
    }
}

impl<V> OpenStruct<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<'a>(
        interner: &mut Interner,
        pairs: impl IntoIterator<Item = (&'a str, V)>,
    ) -> anyhow::Result<Self> {
        let mut object = Self::new();
        for (name, value) in pairs {
            let name = interner.intern(name);
            object.set(interner, name, value)?;
        }
        Ok(object)
    }

    // same as from_pairs for keys the host has already interned
    pub fn from_symbol_pairs(
        interner: &mut Interner,
        pairs: impl IntoIterator<Item = (Symbol, V)>,
    ) -> anyhow::Result<Self> {
        let mut object = Self::new();
        for (name, value) in pairs {
            object.set(interner, name, value)?;
        }
        Ok(object)
    }

    // either spelling of the name resolves; the tag bit only matters to
    // dispatch
    pub fn get(&self, name: Symbol) -> Option<&V> {
        let slot = self.index.lookup(name)?;
        Some(self.values.get(slot.index()))
    }

    // returns a borrow of the freshly stored slot
    pub fn set(&mut self, interner: &mut Interner, name: Symbol, value: V) -> anyhow::Result<&V> {
        let index = match self.index.lookup(name) {
            Some(slot) => {
                let index = slot.index();
                self.values.set(index, value);
                index
            }
            None => self.create(interner, name, value)? as usize,
        };
        Ok(self.values.get(index))
    }

    pub fn has(&self, name: Symbol) -> bool {
        self.index.lookup(name).is_some()
    }

    pub fn pairs(&self) -> impl Iterator<Item = (Symbol, &V)> + '_ {
        self.index
            .iter()
            .filter(|(_, slot)| !slot.is_write_alias())
            .map(|(name, slot)| (name, self.values.get(slot.index())))
    }

    pub fn len(&self) -> usize {
        self.index.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    // creation installs the canonical read/write entry pair no matter which
    // spelling triggered it; the name is canonicalized before the value is
    // appended, so a failed creation leaves the instance untouched
    pub(crate) fn create(
        &mut self,
        interner: &mut Interner,
        name: Symbol,
        value: V,
    ) -> anyhow::Result<u32> {
        let read = interner.read_name(name).unwrap_or(name);
        let write = interner.write_name(read);
        let index = self.values.push(value)?;
        self.index.insert(read, SlotRef::read(index));
        self.index.insert(write, SlotRef::write(index));
        tracing::debug!("created attribute `{}` at slot {index}", interner.name(read));
        Ok(index)
    }
}
