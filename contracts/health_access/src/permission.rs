//! Permission encoding.
//!
//! Permissions travel as plain integers and only the four canonical values
//! are ever accepted. Sufficiency is an integer comparison, not a flag
//! containment test: a granted `Delete` (4) satisfies a required `Write` (2).

pub const READ: u32 = 1;
pub const WRITE: u32 = 2;
pub const DELETE: u32 = 4;
pub const FULL: u32 = READ | WRITE | DELETE;

/// Membership in `{1, 2, 4, 7}`. Combinations such as 3, 5 or 6 are rejected.
pub fn is_valid(permissions: u32) -> bool {
    matches!(permissions, READ | WRITE | DELETE | FULL)
}

/// Returns true when `granted` numerically covers `required`.
pub fn sufficient(granted: u32, required: u32) -> bool {
    granted >= required
}
