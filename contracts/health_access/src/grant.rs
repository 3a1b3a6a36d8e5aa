//! The active-grant register.
//!
//! There is exactly one slot for the whole contract. Every successful grant
//! overwrites it regardless of which patient, provider, or record it names,
//! so a new grant silently displaces the previous one. The all-zero value is
//! the "no grant" sentinel.

use soroban_sdk::{contracttype, symbol_short, Env, Symbol};

const ACTIVE_GRANT: Symbol = symbol_short!("ACT_GRNT");

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ActiveGrant {
    pub patient_id: u64,
    pub provider_id: u64,
    pub record_id: u64,
    pub permissions: u32,
}

impl ActiveGrant {
    pub fn none() -> Self {
        Self::default()
    }

    /// Permissions are never zero on a real grant, so a zero value marks the
    /// empty register even when the ids are all zero.
    pub fn is_none(&self) -> bool {
        self.permissions == 0
    }

    pub fn matches(&self, patient_id: u64, provider_id: u64, record_id: u64) -> bool {
        !self.is_none()
            && self.patient_id == patient_id
            && self.provider_id == provider_id
            && self.record_id == record_id
    }
}

/// Handle to the storage slot holding the active grant.
#[derive(Clone, Debug)]
pub struct GrantSlot {
    key: Symbol,
}

impl GrantSlot {
    /// The contract-wide slot.
    pub fn global() -> Self {
        Self { key: ACTIVE_GRANT }
    }

    pub fn load(&self, env: &Env) -> ActiveGrant {
        env.storage()
            .instance()
            .get(&self.key)
            .unwrap_or_else(ActiveGrant::none)
    }

    pub fn store(&self, env: &Env, grant: &ActiveGrant) {
        env.storage().instance().set(&self.key, grant);
    }
}
