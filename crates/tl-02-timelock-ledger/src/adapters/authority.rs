//! # Owner Authority Adapter

use crate::ports::outbound::OwnerAuthority;
use shared_types::entities::Address;

/// One fixed owner address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingleOwner(Address);

impl SingleOwner {
    /// Grant the owner role to `owner`.
    #[must_use]
    pub const fn new(owner: Address) -> Self {
        Self(owner)
    }
}

impl OwnerAuthority for SingleOwner {
    fn owner(&self) -> Address {
        self.0
    }
}
