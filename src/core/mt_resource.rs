//! # MtResource Module
//!
//! A shared handle for state that several threads read and occasionally write.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A thread-safe, reference-counted resource container with read-write locking.
///
/// `MtResource` is how the voxel grid is shared when a host queries it from more
/// than one thread: one writer excludes everybody, any number of readers may
/// run ray and collision queries side by side, and no reader can observe a
/// half-written chunk.
///
/// # Type Parameters
/// - `T`: The type of the contained resource, must be `Send + Sync`
///
/// # Examples
///
/// ```
/// use voxel_world::core::MtResource;
///
/// let counter = MtResource::new(0);
/// *counter.get_mut() += 1;
/// assert_eq!(*counter.get(), 1);
/// ```
///
/// # Poisoning
/// A writer that panics leaves the lock poisoned. The guard is recovered rather
/// than propagating the panic; a voxel write either fully lands or does not
/// touch the chunk at all, so the inner value stays consistent.
pub struct MtResource<T: Send + Sync> {
    resource: Arc<RwLock<T>>,
}

impl<T: Send + Sync> MtResource<T> {
    /// Wraps `resource` in a new shared handle.
    pub fn new(resource: T) -> Self {
        Self {
            resource: Arc::new(RwLock::new(resource)),
        }
    }

    /// Returns a read guard. Blocks while a writer holds the lock.
    pub fn get(&self) -> RwLockReadGuard<'_, T> {
        self.resource
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns an exclusive write guard. Blocks until all readers are gone.
    pub fn get_mut(&self) -> RwLockWriteGuard<'_, T> {
        self.resource
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` under the read lock and returns its result.
    pub fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.get())
    }

    /// Runs `f` under the write lock and returns its result.
    pub fn write_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.get_mut())
    }

    /// Number of live handles sharing this resource.
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.resource)
    }
}

impl<T: Send + Sync> Clone for MtResource<T> {
    fn clone(&self) -> Self {
        Self {
            resource: self.resource.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn clones_share_state() {
        let a = MtResource::new(vec![1, 2]);
        let b = a.clone();
        b.write_with(|v| v.push(3));
        assert_eq!(a.read_with(|v| v.len()), 3);
        assert_eq!(a.handle_count(), 2);
    }

    #[test]
    fn survives_a_poisoned_lock() {
        let shared = MtResource::new(7);
        let clone = shared.clone();
        let _ = thread::spawn(move || {
            let _guard = clone.get_mut();
            panic!("writer died");
        })
        .join();
        assert_eq!(*shared.get(), 7);
    }
}
