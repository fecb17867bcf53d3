//! # Signature Path Rules
//!
//! A file's detached signature lives next to it. Its name is derived by
//! cutting exactly [`SIGNATURE_EXTENSION_LEN`] characters off the full path
//! and appending [`SIGNATURE_EXTENSION`]:
//!
//! ```text
//! \A\B\file.dat     ->  \A\B\file.sig
//! \A\B\file.tar.gz  ->  \A\B\file.ta.sig
//! ```
//!
//! Only absolute names (starting with the namespace separator) longer than
//! the extension are accepted. Lengths are counted in characters.

use super::entities::{SIGNATURE_EXTENSION, SIGNATURE_EXTENSION_LEN};
use super::errors::VerifyError;

/// Check that `name` is eligible for signature verification.
pub fn validate_file_name(name: &str, separator: char) -> Result<(), VerifyError> {
    if name.starts_with(separator) && name.chars().count() > SIGNATURE_EXTENSION_LEN {
        Ok(())
    } else {
        Err(VerifyError::name_invalid(name))
    }
}

/// Derive the signature file name for `name`.
pub fn derive_sig_path(name: &str, separator: char) -> Result<String, VerifyError> {
    validate_file_name(name, separator)?;

    let cut = name
        .char_indices()
        .rev()
        .nth(SIGNATURE_EXTENSION_LEN - 1)
        .map(|(index, _)| index)
        .ok_or_else(|| VerifyError::name_invalid(name))?;

    let mut sig_path = String::new();
    sig_path
        .try_reserve_exact(cut + SIGNATURE_EXTENSION.len())
        .map_err(|_| VerifyError::InsufficientResources {
            requested: cut + SIGNATURE_EXTENSION.len(),
        })?;
    sig_path.push_str(&name[..cut]);
    sig_path.push_str(SIGNATURE_EXTENSION);
    Ok(sig_path)
}
