//! Property-based tests for permission validation and sufficiency.
//!
//! Invariants tested:
//! - Only 1, 2, 4 and 7 are ever accepted by `grant_access`
//! - After a valid grant, `has_access` is exactly `granted >= required`
//! - Any other triple never has access while a grant is active

use health_access::permission::{is_valid, sufficient};
use health_access::{ActiveGrant, ContractError, HealthAccessContract, HealthAccessContractClient};
use proptest::prelude::*;
use soroban_sdk::{Env, String};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn setup_with_record(
    patient_id: u64,
    record_id: u64,
) -> (Env, HealthAccessContractClient<'static>) {
    let env = Env::default();
    let contract_id = env.register(HealthAccessContract, ());
    let client = HealthAccessContractClient::new(&env, &contract_id);

    client.register_patient(&patient_id, &String::from_str(&env, "pk"));
    client.add_medical_record(&patient_id, &record_id, &String::from_str(&env, "chart"));

    (env, client)
}

fn canonical_permission() -> impl Strategy<Value = u32> {
    prop_oneof![Just(1u32), Just(2u32), Just(4u32), Just(7u32)]
}

// ── proptest! blocks ──────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// `is_valid` is membership in the canonical set, nothing else.
    #[test]
    fn prop_is_valid_is_set_membership(p in any::<u32>()) {
        prop_assert_eq!(is_valid(p), p == 1 || p == 2 || p == 4 || p == 7);
    }

    /// `sufficient` is plain integer comparison.
    #[test]
    fn prop_sufficient_is_numeric(granted in any::<u32>(), required in any::<u32>()) {
        prop_assert_eq!(sufficient(granted, required), granted >= required);
    }

    /// A valid grant answers `has_access` by numeric comparison for every required value.
    #[test]
    fn prop_grant_then_check_is_numeric(
        patient_id in 0u64..1_000,
        provider_id in 0u64..1_000,
        record_id in 0u64..1_000,
        granted in canonical_permission(),
        required in 0u32..=16,
    ) {
        let (_env, client) = setup_with_record(patient_id, record_id);

        client.grant_access(&patient_id, &provider_id, &record_id, &granted);
        prop_assert_eq!(
            client.has_access(&patient_id, &provider_id, &record_id, &required),
            granted >= required
        );
    }

    /// Non-canonical permissions are rejected and leave the register untouched.
    #[test]
    fn prop_invalid_permission_rejected(
        bad in any::<u32>().prop_filter("non-canonical", |p| !is_valid(*p)),
    ) {
        let (_env, client) = setup_with_record(1, 1);

        let result = client.try_grant_access(&1, &1, &1, &bad);
        prop_assert_eq!(result, Err(Ok(ContractError::InvalidPermission)));
        prop_assert_eq!(client.get_active_grant(), ActiveGrant::none());
        prop_assert!(client.get_access_log(&1, &1).is_empty());
    }

    /// While a grant is active, no other provider has any access to the record.
    #[test]
    fn prop_other_provider_never_has_access(
        provider_id in 0u64..100,
        other in 0u64..100,
        granted in canonical_permission(),
        required in 0u32..=7,
    ) {
        prop_assume!(provider_id != other);
        let (_env, client) = setup_with_record(1, 1);

        client.grant_access(&1, &provider_id, &1, &granted);
        prop_assert!(!client.has_access(&1, &other, &1, &required));
    }
}
