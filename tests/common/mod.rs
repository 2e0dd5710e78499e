#![allow(dead_code)]

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Counts live `Tracked` payloads and how they were copied.
#[derive(Default)]
pub struct Counters {
    live: Cell<usize>,
    clones: Cell<usize>,
    clone_froms: Cell<usize>,
}

impl Counters {
    pub fn new() -> Rc<Counters> {
        Rc::new(Counters::default())
    }

    pub fn live(&self) -> usize {
        self.live.get()
    }

    pub fn clones(&self) -> usize {
        self.clones.get()
    }

    pub fn clone_froms(&self) -> usize {
        self.clone_froms.get()
    }
}

/// A payload that reports its own construction, copying and destruction.
pub struct Tracked {
    pub value: i32,
    counters: Rc<Counters>,
}

impl Tracked {
    pub fn new(value: i32, counters: &Rc<Counters>) -> Tracked {
        counters.live.set(counters.live.get() + 1);
        Tracked {
            value,
            counters: Rc::clone(counters),
        }
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        self.counters.clones.set(self.counters.clones.get() + 1);
        Tracked::new(self.value, &self.counters)
    }

    fn clone_from(&mut self, source: &Self) {
        self.counters.clone_froms.set(self.counters.clone_froms.get() + 1);
        self.value = source.value;
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.counters.live.set(self.counters.live.get() - 1);
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl fmt::Debug for Tracked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tracked").field(&self.value).finish()
    }
}
