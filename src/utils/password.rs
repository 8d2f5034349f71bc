use argon2::{
    password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use rand_core::OsRng;

/// Credentials are always argon2id v1.3. Stored PHC strings carry their own
/// parameters, so older hashes keep verifying if these change.
fn hasher() -> Argon2<'static> {
    Argon2::new(Algorithm::Argon2id, Version::V0x13, Params::default())
}

/// Salted hash of `password`, encoded as a PHC string.
pub fn hash(password: &str) -> Result<String, password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let phc = hasher().hash_password(password.as_bytes(), &salt)?;
    Ok(phc.to_string())
}

/// `Ok(false)` on a mismatch. Errors when `stored` does not parse or the
/// hasher itself fails.
pub fn verify(password: &str, stored: &str) -> Result<bool, password_hash::Error> {
    let parsed = PasswordHash::new(stored)?;
    match hasher().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_salted_argon2id() {
        let a = hash("hunter2").unwrap();
        let b = hash("hunter2").unwrap();
        assert_ne!(a, b);
        assert!(!a.contains("hunter2"));

        let parsed = PasswordHash::new(&a).unwrap();
        assert_eq!(parsed.algorithm.as_str(), "argon2id");
        assert_eq!(parsed.version, Some(0x13));
    }

    #[test]
    fn verify_matches_only_the_original() {
        let h = hash("correct horse").unwrap();
        assert!(verify("correct horse", &h).unwrap());
        assert!(!verify("correct horse ", &h).unwrap());
        assert!(!verify("", &h).unwrap());
    }

    #[test]
    fn verify_rejects_malformed_hash() {
        assert!(verify("anything", "not-a-phc-string").is_err());
    }

    #[test]
    fn verify_accepts_hash_with_other_params() {
        let params = Params::new(8 * 1024, 1, 1, None).unwrap();
        let salt = SaltString::generate(&mut OsRng);
        let weak = Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
            .hash_password(b"legacy", &salt)
            .unwrap()
            .to_string();
        assert!(verify("legacy", &weak).unwrap());
        assert!(!verify("other", &weak).unwrap());
    }
}
