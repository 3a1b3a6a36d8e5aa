//! Copy-on-write staging for grant and revoke.
//!
//! Operations stage their record and register updates here and write nothing
//! until [`Transaction::commit`]. Returning early with an error drops the
//! transaction, so a failed precondition or a full access log never leaves a
//! half-applied change behind, independent of the host's own rollback.

use soroban_sdk::Env;

use crate::grant::{ActiveGrant, GrantSlot};
use crate::records::{self, MedicalRecord};

struct StagedRecord {
    patient_id: u64,
    record_id: u64,
    record: MedicalRecord,
}

pub struct Transaction<'a> {
    env: &'a Env,
    slot: &'a GrantSlot,
    record: Option<StagedRecord>,
    grant: Option<ActiveGrant>,
}

impl<'a> Transaction<'a> {
    pub fn begin(env: &'a Env, slot: &'a GrantSlot) -> Self {
        Self {
            env,
            slot,
            record: None,
            grant: None,
        }
    }

    pub fn stage_record(&mut self, patient_id: u64, record_id: u64, record: MedicalRecord) {
        self.record = Some(StagedRecord {
            patient_id,
            record_id,
            record,
        });
    }

    pub fn stage_grant(&mut self, grant: ActiveGrant) {
        self.grant = Some(grant);
    }

    pub fn commit(self) {
        if let Some(staged) = self.record {
            records::set(self.env, staged.patient_id, staged.record_id, &staged.record);
        }
        if let Some(grant) = self.grant {
            self.slot.store(self.env, &grant);
        }
    }
}
