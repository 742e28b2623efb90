// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
//! Process-wide table of variable names.
//!
//! Terms key their exponent maps by [`VarId`], a small integer handed out once per name.
//! The table only ever grows, so an id stays valid for the life of the process.
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

/// Interned identifier of a variable name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarId(u32);

impl VarId {
    /// interns `name` in the global table
    pub fn of(name: &str) -> VarId {
        global_intern(name)
    }

    /// id of an already known name, without registering it
    pub fn lookup(name: &str) -> Option<VarId> {
        let table = GLOBAL_INTERNER
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        table.lookup(name)
    }

    pub fn name(self) -> Arc<str> {
        let table = GLOBAL_INTERNER
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        table.name(self)
    }

    pub fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for VarId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Append-only name table. A standalone instance is usable in isolation; the engine
/// itself goes through the locked global one.
#[derive(Debug, Default)]
pub struct VariableInterner {
    ids: HashMap<Arc<str>, VarId>,
    names: Vec<Arc<str>>,
}

impl VariableInterner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern(&mut self, name: &str) -> VarId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = VarId(self.names.len() as u32);
        let shared: Arc<str> = Arc::from(name);
        self.names.push(shared.clone());
        self.ids.insert(shared, id);
        id
    }

    pub fn lookup(&self, name: &str) -> Option<VarId> {
        self.ids.get(name).copied()
    }

    /// Name behind `id`. Ids from another table resolve to a placeholder.
    pub fn name(&self, id: VarId) -> Arc<str> {
        match self.names.get(id.0 as usize) {
            Some(name) => name.clone(),
            None => Arc::from(format!("#{}", id.0).as_str()),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

static GLOBAL_INTERNER: LazyLock<RwLock<VariableInterner>> =
    LazyLock::new(|| RwLock::new(VariableInterner::new()));

fn global_intern(name: &str) -> VarId {
    {
        let table = GLOBAL_INTERNER
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(id) = table.lookup(name) {
            return id;
        }
    }
    // another thread may have registered the name between the two locks;
    // intern() checks again under the write lock
    let mut table = GLOBAL_INTERNER
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    table.intern(name)
}
