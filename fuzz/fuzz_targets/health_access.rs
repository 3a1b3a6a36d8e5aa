#![no_main]

use arbitrary::Arbitrary;
use health_access::audit::MAX_ACCESS_LOG_ENTRIES;
use health_access::{HealthAccessContract, HealthAccessContractClient};
use libfuzzer_sys::fuzz_target;
use soroban_sdk::testutils::Ledger;
use soroban_sdk::{Env, String};

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    RegisterPatient { patient: u8, key_len: u8 },
    AddRecord { patient: u8, record: u8, data_len: u16 },
    Grant { patient: u8, provider: u8, record: u8, permissions: u8 },
    Revoke { patient: u8, provider: u8, record: u8 },
    Check { patient: u8, provider: u8, record: u8, required: u8 },
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    let contract_id = env.register(HealthAccessContract, ());
    let client = HealthAccessContractClient::new(&env, &contract_id);

    for (step, action) in actions.into_iter().enumerate() {
        env.ledger().set_sequence_number(step as u32);

        match action {
            FuzzAction::RegisterPatient { patient, key_len } => {
                let key = "k".repeat(key_len as usize);
                let _ = client.try_register_patient(&u64::from(patient % 4), &String::from_str(&env, &key));
            }
            FuzzAction::AddRecord { patient, record, data_len } => {
                // Lengths just past the 256 byte limit exercise the rejection path.
                let data = "d".repeat((data_len % 300) as usize);
                let _ = client.try_add_medical_record(
                    &u64::from(patient % 4),
                    &u64::from(record % 4),
                    &String::from_str(&env, &data),
                );
            }
            FuzzAction::Grant { patient, provider, record, permissions } => {
                let patient = u64::from(patient % 4);
                let provider = u64::from(provider % 4);
                let record = u64::from(record % 4);
                let permissions = u32::from(permissions % 9);
                let before = client.get_active_grant();

                match client.try_grant_access(&patient, &provider, &record, &permissions) {
                    Ok(Ok(grant)) => {
                        assert_eq!(client.get_active_grant(), grant);
                        assert!(client.has_access(&patient, &provider, &record, &permissions));
                    }
                    _ => assert_eq!(client.get_active_grant(), before),
                }
            }
            FuzzAction::Revoke { patient, provider, record } => {
                let patient = u64::from(patient % 4);
                let provider = u64::from(provider % 4);
                let record = u64::from(record % 4);
                if let Ok(Ok(true)) = client.try_revoke_access(&patient, &provider, &record) {
                    assert!(client.get_active_grant().is_none());
                }
            }
            FuzzAction::Check { patient, provider, record, required } => {
                let patient = u64::from(patient % 4);
                let provider = u64::from(provider % 4);
                let record = u64::from(record % 4);
                let _ = client.has_access(&patient, &provider, &record, &u32::from(required));
            }
        }
    }

    for patient in 0..4u64 {
        for record in 0..4u64 {
            if let Ok(Ok(log)) = client.try_get_access_log(&patient, &record) {
                assert!(log.len() <= MAX_ACCESS_LOG_ENTRIES);
            }
        }
    }
});
