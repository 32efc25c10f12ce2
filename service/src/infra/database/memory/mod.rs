//! In-memory [`Database`] implementation.

mod impls;

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use derive_more::{Display, Error as StdError};
use tracerr::Traced;

use crate::{
    domain::{leave, Employee},
    infra::database,
};
#[cfg(doc)]
use crate::infra::Database;

/// In-memory [`Database`] keeping [`Employee`]s and leave [`Request`]s in
/// their insertion order.
///
/// Reads share the state, while every write holds it exclusively, so each
/// single operation is atomic. Clones share the same state.
///
/// [`Request`]: leave::Request
#[derive(Clone, Debug, Default)]
pub struct Memory(Arc<RwLock<State>>);

/// State of a [`Memory`] [`Database`].
#[derive(Debug, Default)]
struct State {
    /// Stored [`Employee`]s.
    employees: Vec<Employee>,

    /// Stored leave [`Request`]s.
    ///
    /// [`Request`]: leave::Request
    leaves: Vec<leave::Request>,
}

impl Memory {
    /// Creates a new empty [`Memory`] [`Database`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires a shared access to the [`State`].
    fn read(
        &self,
    ) -> Result<RwLockReadGuard<'_, State>, Traced<database::Error>> {
        self.0
            .read()
            .map_err(|_| tracerr::new!(database::Error::from(Error::Poisoned)))
    }

    /// Acquires an exclusive access to the [`State`].
    fn write(
        &self,
    ) -> Result<RwLockWriteGuard<'_, State>, Traced<database::Error>> {
        self.0
            .write()
            .map_err(|_| tracerr::new!(database::Error::from(Error::Poisoned)))
    }
}

/// [`Memory`] [`Database`] error.
#[derive(Clone, Copy, Debug, Display, StdError)]
pub enum Error {
    /// A writer panicked while holding the state lock.
    #[display("state lock is poisoned")]
    Poisoned,
}
