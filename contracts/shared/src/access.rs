use soroban_sdk::{contracttype, Address};

use crate::errors::Error;

/// Administrator gate shared by the platform contracts. Each contract
/// stores one guard in instance storage at initialization.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct AccessGuard {
    pub administrator: Address,
}

impl AccessGuard {
    pub fn new(administrator: Address) -> Self {
        Self { administrator }
    }

    /// Pure precondition check: no state is read or written either way.
    pub fn require_administrator(&self, caller: &Address) -> Result<(), Error> {
        if *caller == self.administrator {
            Ok(())
        } else {
            Err(Error::Unauthorized)
        }
    }
}
