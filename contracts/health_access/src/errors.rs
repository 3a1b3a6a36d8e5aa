use soroban_sdk::{contracttype, log, Env};

/// Error categories for classifying different types of errors
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorCategory {
    /// Validation errors: invalid permission values or malformed input
    Validation = 1,
    /// Not found errors: patient, record, or grant lookup failures
    NotFound = 2,
    /// State conflict errors: duplicate registrations
    StateConflict = 3,
    /// Capacity errors: a bounded structure is exhausted
    Capacity = 4,
}

/// Error severity levels indicating the impact and urgency of errors
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorSeverity {
    /// Low severity: caller supplied bad input
    Low = 1,
    /// Medium severity: the call conflicts with current state
    Medium = 2,
    /// Critical severity: the operation can never succeed again for this resource
    Critical = 3,
}

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    PatientNotFound = 1,
    RecordNotFound = 2,
    AccessNotFound = 3,
    InvalidPermission = 4,
    LogOverflow = 5,
    PatientAlreadyRegistered = 6,
    DuplicateRecord = 7,
    InvalidInput = 8,
}

impl ContractError {
    /// Returns the error category for this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContractError::InvalidPermission | ContractError::InvalidInput => {
                ErrorCategory::Validation
            }
            ContractError::PatientNotFound
            | ContractError::RecordNotFound
            | ContractError::AccessNotFound => ErrorCategory::NotFound,
            ContractError::PatientAlreadyRegistered | ContractError::DuplicateRecord => {
                ErrorCategory::StateConflict
            }
            ContractError::LogOverflow => ErrorCategory::Capacity,
        }
    }

    /// Returns the severity level for this error.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ContractError::InvalidPermission
            | ContractError::InvalidInput
            | ContractError::PatientNotFound
            | ContractError::RecordNotFound
            | ContractError::AccessNotFound => ErrorSeverity::Low,
            ContractError::PatientAlreadyRegistered | ContractError::DuplicateRecord => {
                ErrorSeverity::Medium
            }
            ContractError::LogOverflow => ErrorSeverity::Critical,
        }
    }

    /// Fatal errors abort the whole operation and cannot be cleared by
    /// retrying with different arguments against the same record.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ContractError::LogOverflow)
    }
}

/// Emits a diagnostic log line for a rejected call and hands the error back
/// so call sites can write `return Err(reject(...))`.
pub fn reject(env: &Env, error: ContractError, patient_id: u64, record_id: u64) -> ContractError {
    log!(
        env,
        "rejected: code={} category={} severity={} fatal={} patient={} record={}",
        error as u32,
        error.category() as u32,
        error.severity() as u32,
        error.is_fatal(),
        patient_id,
        record_id
    );
    error
}
