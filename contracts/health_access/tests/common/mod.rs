#![allow(dead_code)]

use health_access::{HealthAccessContract, HealthAccessContractClient};
use soroban_sdk::testutils::Ledger;
use soroban_sdk::{Env, String};

pub struct TestContext {
    pub env: Env,
    pub client: HealthAccessContractClient<'static>,
}

/// Creates a Soroban environment and deploys the contract.
pub fn setup_test_env() -> TestContext {
    let env = Env::default();

    let contract_id = env.register(HealthAccessContract, ());
    let client = HealthAccessContractClient::new(&env, &contract_id);

    TestContext { env, client }
}

/// Registers a patient with a throwaway public key.
pub fn create_test_patient(ctx: &TestContext, patient_id: u64) {
    let key = String::from_str(&ctx.env, "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM");
    ctx.client.register_patient(&patient_id, &key);
}

/// Registers the patient if needed, then stores a record for it.
pub fn create_test_record(ctx: &TestContext, patient_id: u64, record_id: u64) {
    if ctx.client.try_get_patient(&patient_id).is_err() {
        create_test_patient(ctx, patient_id);
    }
    let data = String::from_str(&ctx.env, "Blood pressure 120/80, no acute findings");
    ctx.client.add_medical_record(&patient_id, &record_id, &data);
}

/// Moves the ledger forward so log entries get distinct sequence numbers.
pub fn advance_sequence(ctx: &TestContext, by: u32) {
    let next = ctx.env.ledger().sequence() + by;
    ctx.env.ledger().set_sequence_number(next);
}
