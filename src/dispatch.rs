use crate::{
    object::OpenStruct,
    symbol::{Interner, Symbol},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch<V> {
    Handled(V),
    Declined,
}

impl<V> OpenStruct<V> {
    pub fn responds_to(&self, name: Symbol) -> bool {
        self.has(name)
    }
}

impl<V: Clone> OpenStruct<V> {
    // decision procedure behind the host's unknown-method fallback hook; on
    // Declined the host applies its own default policy
    pub fn try_handle(
        &mut self,
        interner: &mut Interner,
        name: Symbol,
        args: &[V],
    ) -> anyhow::Result<Dispatch<V>> {
        if args.len() >= 2 {
            tracing::trace!("decline `{}`: {} arguments", interner.name(name), args.len());
            return Ok(Dispatch::Declined);
        }
        match self.index.lookup(name) {
            Some(slot) if !slot.is_write_alias() => {
                // a resolved read name returns the stored value; the argument
                // count is not consulted
                tracing::trace!("read `{}` from slot {}", interner.name(name), slot.index());
                Ok(Dispatch::Handled(self.values.get(slot.index()).clone()))
            }
            Some(slot) => {
                let Some(value) = args.first() else {
                    tracing::trace!("decline `{}`: write name without argument", interner.name(name));
                    return Ok(Dispatch::Declined);
                };
                tracing::trace!("write `{}` to slot {}", interner.name(name), slot.index());
                self.values.set(slot.index(), value.clone());
                Ok(Dispatch::Handled(value.clone()))
            }
            None => {
                let Some(value) = args.first() else {
                    tracing::trace!("decline `{}`: unknown name", interner.name(name));
                    return Ok(Dispatch::Declined);
                };
                if interner.read_name(name).is_none() {
                    tracing::trace!("decline `{}`: not a write name", interner.name(name));
                    return Ok(Dispatch::Declined);
                }
                // create reverses the single trailing marker itself
                self.create(interner, name, value.clone())?;
                Ok(Dispatch::Handled(value.clone()))
            }
        }
    }
}
