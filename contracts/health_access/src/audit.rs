//! Bounded per-record access log.
//!
//! Each record keeps at most [`MAX_ACCESS_LOG_ENTRIES`] entries. A full log
//! is never truncated or rotated: the append fails with
//! [`ContractError::LogOverflow`], which aborts the enclosing grant or revoke.
//! Once a record's log is full, no further grant or revoke on it can succeed.

use soroban_sdk::Env;

use crate::records::{AccessLogEntry, MedicalRecord};
use crate::ContractError;

pub const MAX_ACCESS_LOG_ENTRIES: u32 = 10;

/// Action value recorded for a revocation.
pub const REVOKED: u32 = 0;

/// Returns `record` with a new trailing entry stamped with the current ledger
/// sequence. Works on the caller's copy only; nothing is persisted here.
pub fn append(
    env: &Env,
    mut record: MedicalRecord,
    provider_id: u64,
    action: u32,
) -> Result<MedicalRecord, ContractError> {
    if record.access_log.len() >= MAX_ACCESS_LOG_ENTRIES {
        return Err(ContractError::LogOverflow);
    }

    record.access_log.push_back(AccessLogEntry {
        provider_id,
        logged_at: env.ledger().sequence(),
        action,
    });
    Ok(record)
}

pub fn remaining_capacity(record: &MedicalRecord) -> u32 {
    MAX_ACCESS_LOG_ENTRIES.saturating_sub(record.access_log.len())
}
