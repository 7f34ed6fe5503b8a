use std::cell::{RefCell, RefMut};
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::hash::Hash;
use std::ops::Deref;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Shared handle to an immutable kind record. Kinds are loaded once and then
/// referenced from many instances, so reads must not pay RefCell costs.
pub struct Shared<T> {
    inner: Rc<RefCell<T>>,
}

impl<T: Debug> Debug for Shared<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self.deref(), f)
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Shared<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(value)),
        }
    }

    #[inline]
    pub fn borrow_mut(&mut self) -> RefMut<'_, T> {
        self.inner.borrow_mut()
    }
}

impl<T> Deref for Shared<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &Self::Target {
        // SAFETY: kinds are mutated only during content loading, before any
        // instance holds a handle to them.
        unsafe { &*self.inner.as_ptr() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DictionaryError {
    KindNotFound { key: String },
    KindNameNotFound { name: String },
}

/// Catalog of kinds addressable both by key and by name.
pub struct Dictionary<K, T> {
    keys: HashMap<K, Shared<T>>,
    names: HashMap<String, Shared<T>>,
}

impl<K, T> Default for Dictionary<K, T> {
    fn default() -> Self {
        Self {
            keys: HashMap::default(),
            names: HashMap::default(),
        }
    }
}

impl<K, T> Dictionary<K, T>
where
    K: Debug + Copy + Hash + Eq,
{
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn insert(&mut self, key: K, name: &str, kind: T) {
        let kind = Shared::new(kind);
        self.keys.insert(key, kind.clone());
        self.names.insert(name.to_string(), kind);
    }

    pub fn get(&self, key: K) -> Result<Shared<T>, DictionaryError> {
        self.keys
            .get(&key)
            .cloned()
            .ok_or(DictionaryError::KindNotFound {
                key: format!("{:?}", key),
            })
    }

    pub fn find(&self, name: &str) -> Result<Shared<T>, DictionaryError> {
        self.names
            .get(name)
            .cloned()
            .ok_or(DictionaryError::KindNameNotFound {
                name: name.to_string(),
            })
    }
}

/// Monotonic id allocator for domain instances.
#[derive(Default, Clone, Copy, PartialEq, Eq)]
pub struct Sequence {
    value: usize,
}

impl Sequence {
    /// Speculative copy for two-phase commands: the id is allocated during
    /// validation and registered only when the commit runs.
    pub fn introduce(&self) -> Sequence {
        *self
    }

    pub fn one<C, T>(&mut self, constructor: C) -> T
    where
        C: Fn(usize) -> T,
    {
        self.value += 1;
        constructor(self.value)
    }

    pub fn register(&mut self, id: usize) {
        if id > self.value {
            self.value = id;
        }
    }
}
