use bcrypt::{hash, verify, BcryptError, DEFAULT_COST};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("Could not hash password: {0}")]
    Hashing(#[source] BcryptError),
    #[error("Stored hash is not a valid bcrypt hash: {0}")]
    MalformedHash(#[source] BcryptError),
}

/// Hash `raw` with bcrypt at the library's default cost.
pub fn hash_password(raw: &str) -> Result<String, PasswordError> {
    hash_password_with_cost(raw, DEFAULT_COST)
}

pub fn hash_password_with_cost(raw: &str, cost: u32) -> Result<String, PasswordError> {
    hash(raw, cost).map_err(PasswordError::Hashing)
}

/// Check `raw` against `stored`. A hash that cannot be parsed is an error, not a mismatch.
pub fn verify_password(raw: &str, stored: &str) -> Result<bool, PasswordError> {
    verify(raw, stored).map_err(PasswordError::MalformedHash)
}

/// One line of a password check run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateResult {
    pub candidate: String,
    pub matches: bool,
}

pub fn check_candidates(stored: &str, candidates: &[String]) -> Result<Vec<CandidateResult>, PasswordError> {
    candidates
        .iter()
        .map(|candidate| {
            verify_password(candidate, stored).map(|matches| CandidateResult {
                candidate: candidate.clone(),
                matches,
            })
        })
        .collect()
}
