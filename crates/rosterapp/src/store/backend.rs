use crate::error::Result;
use std::rc::Rc;

/// Abstract interface for the persisted key-value mirror.
///
/// Values are opaque text: the callers decide what is JSON and what is a
/// raw flag. This trait handles the "how" of storage (filesystem vs memory),
/// while `RecordStore`, `AuthSession` and `ThemeStore` handle the "what".
///
/// Methods take `&self` so one backend can be shared between those owners;
/// implementations use interior mutability where they need it.
pub trait StorageBackend {
    /// Read the value stored under `key`.
    /// Returns Ok(None) when the key is absent.
    /// Returns Err only when storage itself failed.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for Rc<B> {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
