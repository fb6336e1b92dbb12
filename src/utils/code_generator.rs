//! Short code generation.
//!
//! Codes are drawn from the OS random source and encoded as URL-safe base64
//! without padding. Uniqueness is not guaranteed here; callers check the store.

use base64::Engine as _;
use thiserror::Error;

/// Length of random bytes before base64 encoding (yields 8 characters).
const CODE_LENGTH_BYTES: usize = 6;

/// The random source could not produce bytes.
#[derive(Debug, Error)]
#[error("random source unavailable: {0}")]
pub struct GenerationError(pub(crate) String);

/// Source of candidate short codes.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Produces a new candidate code.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if the underlying random source fails.
    fn generate(&self) -> Result<String, GenerationError>;
}

/// [`CodeGenerator`] backed by the OS random number generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> Result<String, GenerationError> {
        generate_code()
    }
}

/// Generates a random 8-character URL-safe code.
///
/// # Errors
///
/// Returns [`GenerationError`] if the system random number generator fails.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code()?;
/// assert_eq!(code.len(), 8);
/// assert!(code.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_'));
/// ```
pub fn generate_code() -> Result<String, GenerationError> {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    getrandom::fill(&mut buffer).map_err(|e| GenerationError(e.to_string()))?;

    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer))
}
