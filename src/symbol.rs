use std::collections::HashMap;

pub const WRITE_MARKER: char = '=';

// not impl Default intentionally; a Symbol only means something together with
// the Interner that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u32);

#[derive(Debug, Default)]
pub struct Interner {
    ids: HashMap<Box<str>, Symbol>,
    names: Vec<Box<str>>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern(&mut self, name: &str) -> Symbol {
        if let Some(&symbol) = self.ids.get(name) {
            return symbol;
        }
        let symbol = Symbol(self.names.len() as _);
        self.names.push(name.into());
        self.ids.insert(name.into(), symbol);
        symbol
    }

    // non-mutating probe; a name that was never interned cannot be a live
    // attribute anywhere
    pub fn resolve(&self, name: &str) -> Option<Symbol> {
        self.ids.get(name).copied()
    }

    pub fn name(&self, symbol: Symbol) -> &str {
        &self.names[symbol.0 as usize]
    }

    pub fn write_name(&mut self, read: Symbol) -> Symbol {
        let name = format!("{}{WRITE_MARKER}", self.name(read));
        self.intern(&name)
    }

    pub fn read_name(&mut self, write: Symbol) -> Option<Symbol> {
        let name = self.name(write).strip_suffix(WRITE_MARKER)?.to_owned();
        Some(self.intern(&name))
    }
}
