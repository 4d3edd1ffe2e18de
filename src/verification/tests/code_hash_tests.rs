//! Unit tests for the hashed code value object.

use crate::verification::domain::{CodeHash, VerificationDomainError};
use eyre::ensure;
use rstest::rstest;

#[rstest]
fn new_wraps_an_existing_hash() -> eyre::Result<()> {
    let hash = CodeHash::new("precomputed-hash")?;
    ensure!(hash.as_str() == "precomputed-hash");
    Ok(())
}

#[rstest]
#[case("")]
#[case("   ")]
fn blank_hashes_are_rejected(#[case] raw: &str) -> eyre::Result<()> {
    let result = CodeHash::new(raw);
    ensure!(result == Err(VerificationDomainError::EmptyCodeHash));
    Ok(())
}

#[rstest]
fn sha256_produces_the_known_digest() -> eyre::Result<()> {
    let hash = CodeHash::sha256_of("123456");
    // sha256("123456"), lowercase hex
    ensure!(
        hash.as_str() == "8d969eef6ecad3c29a3a629280e686cf0c3f5d5a86aff3ca12020c923adc6c92"
    );
    Ok(())
}

#[rstest]
fn same_code_hashes_to_the_same_value() -> eyre::Result<()> {
    ensure!(CodeHash::sha256_of("482913") == CodeHash::sha256_of("482913"));
    ensure!(CodeHash::sha256_of("482913") != CodeHash::sha256_of("482914"));
    Ok(())
}
