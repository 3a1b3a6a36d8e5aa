use soroban_sdk::{symbol_short, Env};

use crate::grant::ActiveGrant;

/// Event published when a patient is registered.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientRegisteredEvent {
    pub patient_id: u64,
    pub sequence: u32,
}

/// Event published when a patient's active flag changes.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientActiveChangedEvent {
    pub patient_id: u64,
    pub is_active: bool,
    pub sequence: u32,
}

/// Event published when a medical record is stored.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordAddedEvent {
    pub patient_id: u64,
    pub record_id: u64,
    pub sequence: u32,
}

/// Event published when access is granted. `previous` is the grant that was
/// displaced from the register, or the zero sentinel.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessGrantedEvent {
    pub grant: ActiveGrant,
    pub previous: ActiveGrant,
    pub log_remaining: u32,
    pub sequence: u32,
}

/// Event published when the active grant is revoked.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessRevokedEvent {
    pub revoked: ActiveGrant,
    pub log_remaining: u32,
    pub sequence: u32,
}

pub fn publish_patient_registered(env: &Env, patient_id: u64) {
    let topics = (symbol_short!("PAT_REG"), patient_id);
    let data = PatientRegisteredEvent {
        patient_id,
        sequence: env.ledger().sequence(),
    };
    env.events().publish(topics, data);
}

pub fn publish_patient_active_changed(env: &Env, patient_id: u64, is_active: bool) {
    let topics = (symbol_short!("PAT_ACT"), patient_id);
    let data = PatientActiveChangedEvent {
        patient_id,
        is_active,
        sequence: env.ledger().sequence(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when a medical record is stored for a patient.
pub fn publish_record_added(env: &Env, patient_id: u64, record_id: u64) {
    let topics = (symbol_short!("REC_ADD"), patient_id, record_id);
    let data = RecordAddedEvent {
        patient_id,
        record_id,
        sequence: env.ledger().sequence(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when a grant takes over the register.
/// Topics carry the patient and record so indexers can follow one record.
pub fn publish_access_granted(
    env: &Env,
    grant: ActiveGrant,
    previous: ActiveGrant,
    log_remaining: u32,
) {
    let topics = (
        symbol_short!("ACC_GRT"),
        grant.patient_id,
        grant.record_id,
    );
    let data = AccessGrantedEvent {
        grant,
        previous,
        log_remaining,
        sequence: env.ledger().sequence(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when the active grant is revoked.
pub fn publish_access_revoked(env: &Env, revoked: ActiveGrant, log_remaining: u32) {
    let topics = (
        symbol_short!("ACC_REV"),
        revoked.patient_id,
        revoked.record_id,
    );
    let data = AccessRevokedEvent {
        revoked,
        log_remaining,
        sequence: env.ledger().sequence(),
    };
    env.events().publish(topics, data);
}
