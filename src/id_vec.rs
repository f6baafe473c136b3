//! Stable-key slot vector backing the vertex and edge arenas.

use std::fmt::Debug;

/// A key into an [`IdVec`].  The generation distinguishes a live entry from
/// an earlier, removed entry that happened to occupy the same slot.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct IdVecKey {
    index: usize,
    generation: u32,
}

impl IdVecKey {
    /// Returns the slot index of this key.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the generation of this key.
    #[cfg(test)]
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

#[derive(Clone, Debug)]
struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

/// A map-like container that assigns stable keys to inserted values.
///
/// Removed slots are recycled, but each recycling bumps the slot's
/// generation, so a key to a removed value never resolves again, even after
/// its slot is reused.  Iteration visits live entries in slot order, which is
/// not insertion order once slots have been recycled.
#[derive(Clone, Debug)]
pub struct IdVec<T> {
    slots: Vec<Slot<T>>,
    /// Vacant slot indices, reused last-in first-out.
    free: Vec<usize>,
}

impl<T> Default for IdVec<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }
}

impl<T> IdVec<T> {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value and returns a stable key for accessing it.
    pub fn insert(&mut self, value: T) -> IdVecKey {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index];
            debug_assert!(slot.value.is_none());
            slot.value = Some(value);
            IdVecKey {
                index,
                generation: slot.generation,
            }
        } else {
            self.slots.push(Slot {
                generation: 0,
                value: Some(value),
            });
            IdVecKey {
                index: self.slots.len() - 1,
                generation: 0,
            }
        }
    }

    /// Returns a reference to the value associated with the given key, or
    /// `None` if it has been removed.
    pub fn get(&self, key: IdVecKey) -> Option<&T> {
        self.slots
            .get(key.index)
            .filter(|slot| slot.generation == key.generation)
            .and_then(|slot| slot.value.as_ref())
    }

    /// Returns a mutable reference to the value associated with the given
    /// key, or `None` if it has been removed.
    pub fn get_mut(&mut self, key: IdVecKey) -> Option<&mut T> {
        self.slots
            .get_mut(key.index)
            .filter(|slot| slot.generation == key.generation)
            .and_then(|slot| slot.value.as_mut())
    }

    /// Removes the value associated with the given key and returns it, or
    /// `None` if it was already removed.
    pub fn remove(&mut self, key: IdVecKey) -> Option<T> {
        let slot = self
            .slots
            .get_mut(key.index)
            .filter(|slot| slot.generation == key.generation)?;
        let value = slot.value.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(key.index);
        Some(value)
    }

    /// Removes every entry.  Keys issued before the call stay invalid.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            if slot.value.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
            }
        }
        self.free = (0..self.slots.len()).rev().collect();
    }

    /// Applies `f` to every live value.  Every key of `self` resolves in the
    /// result, and the free list is carried over unchanged.
    pub fn map_values<U>(&self, mut f: impl FnMut(&T) -> U) -> IdVec<U> {
        IdVec {
            slots: self
                .slots
                .iter()
                .map(|slot| Slot {
                    generation: slot.generation,
                    value: slot.value.as_ref().map(&mut f),
                })
                .collect(),
            free: self.free.clone(),
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.iter_pairs().count()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over keys of live entries.
    #[cfg(test)]
    pub fn iter_keys(&self) -> impl Iterator<Item = IdVecKey> + '_ {
        self.iter_pairs().map(|(key, _)| key)
    }

    /// Returns an iterator over (key, value) pairs of live entries.
    #[cfg(test)]
    pub fn iter_pairs(&self) -> impl Iterator<Item = (IdVecKey, &T)> + '_ {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.value.as_ref().map(|value| {
                (
                    IdVecKey {
                        index,
                        generation: slot.generation,
                    },
                    value,
                )
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut vec = IdVec::new();
        let k1 = vec.insert(10);
        let k2 = vec.insert(20);
        assert_eq!(vec.len(), 2);
        assert_eq!(vec.get(k1), Some(&10));
        assert_eq!(vec.get(k2), Some(&20));
    }

    #[test]
    fn test_remove_first() {
        let mut vec = IdVec::new();
        let k1 = vec.insert(1);
        let k2 = vec.insert(2);
        let k3 = vec.insert(3);

        assert_eq!(vec.remove(k1), Some(1));
        assert_eq!(vec.len(), 2);
        assert_eq!(vec.get(k1), None);
        assert_eq!(vec.get(k2), Some(&2));
        assert_eq!(vec.get(k3), Some(&3));
        assert_eq!(vec.remove(k1), None);
    }

    #[test]
    fn test_reused_slot_rejects_stale_key() {
        let mut vec = IdVec::new();
        let k1 = vec.insert("a");
        vec.remove(k1);
        let k2 = vec.insert("b");

        assert_eq!(k1.index(), k2.index());
        assert_ne!(k1.generation(), k2.generation());
        assert_eq!(vec.get(k1), None);
        assert_eq!(vec.get(k2), Some(&"b"));
    }

    #[test]
    fn test_get_mut() {
        let mut vec = IdVec::new();
        let k1 = vec.insert(String::from("x"));
        vec.get_mut(k1).unwrap().push('y');
        assert_eq!(vec.get(k1).map(String::as_str), Some("xy"));
    }

    #[test]
    fn test_clear_invalidates_keys() {
        let mut vec = IdVec::new();
        let k1 = vec.insert(1);
        let k2 = vec.insert(2);
        vec.remove(k2);
        vec.clear();

        assert!(vec.is_empty());
        assert_eq!(vec.get(k1), None);
        let k3 = vec.insert(3);
        assert_eq!(vec.get(k3), Some(&3));
        assert_eq!(vec.get(k1), None);
        assert_eq!(vec.iter_keys().collect::<Vec<_>>(), vec![k3]);
    }

    #[test]
    fn test_map_values_keeps_keys() {
        let mut vec = IdVec::new();
        let k1 = vec.insert(1);
        let k2 = vec.insert(2);
        vec.remove(k1);

        let mut mapped = vec.map_values(|value| value * 10);
        assert_eq!(mapped.get(k1), None);
        assert_eq!(mapped.get(k2), Some(&20));
        assert_eq!(mapped.len(), 1);
        // The vacated slot is reused with the bumped generation.
        let k3 = mapped.insert(30);
        assert_eq!(k3.index(), k1.index());
        assert_eq!(mapped.get(k1), None);
        assert_eq!(vec.get(k2), Some(&2));
    }

    #[test]
    fn test_iter_pairs_skips_removed() {
        let mut vec = IdVec::new();
        let k1 = vec.insert(1);
        let k2 = vec.insert(2);
        let k3 = vec.insert(3);
        vec.remove(k2);

        let pairs: Vec<_> = vec.iter_pairs().map(|(k, v)| (k, *v)).collect();
        assert_eq!(pairs, vec![(k1, 1), (k3, 3)]);
    }
}
