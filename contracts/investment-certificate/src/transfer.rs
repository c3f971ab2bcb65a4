//! The single mutation path for certificate ownership.

use shared::errors::Error;
use shared::types::TokenId;
use soroban_sdk::{Address, Env};

use crate::storage::DataKey;

/// Where an ownership change request came from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OwnershipOrigin {
    /// Initial assignment while minting a new certificate
    Mint,
    /// Any attempt to move an already-minted certificate
    Transfer,
}

/// Commit or reject an ownership change.
///
/// Every write to an `Owner` record goes through here. A mint-origin
/// change is recorded; anything else is rejected before any state is
/// touched, which is the whole of the soulbound rule.
pub fn commit_ownership(
    env: &Env,
    id: TokenId,
    to: &Address,
    origin: OwnershipOrigin,
) -> Result<(), Error> {
    match origin {
        OwnershipOrigin::Mint => {
            env.storage().persistent().set(&DataKey::Owner(id), to);
            Ok(())
        }
        OwnershipOrigin::Transfer => Err(Error::TransferForbidden),
    }
}
