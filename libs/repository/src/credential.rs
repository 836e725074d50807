use argon2::{
    password_hash::{
        self, rand_core::OsRng, PasswordHash, PasswordHasher,
        PasswordVerifier, SaltString,
    },
    Argon2,
};

use crate::{RepositoryError, Response};

pub(crate) fn hash_password(password: &str) -> Response<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(RepositoryError::PasswordHash)
}

pub(crate) fn verify_password(password: &str, hash: &str) -> Response<bool> {
    let hash = PasswordHash::new(hash).map_err(RepositoryError::PasswordHash)?;

    match Argon2::default().verify_password(password.as_bytes(), &hash) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(RepositoryError::PasswordHash(e)),
    }
}

#[cfg(test)]
mod test {
    use super::{hash_password, verify_password};

    #[test]
    fn test_hash_and_verify() {
        // Arrange
        let hash = hash_password("pw123").unwrap();

        // Act & Assert
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("pw123", &hash).unwrap());
        assert!(!verify_password("pw124", &hash).unwrap());
        assert!(!verify_password("PW123", &hash).unwrap());
    }

    #[test]
    fn test_salted() {
        let first = hash_password("pw123").unwrap();
        let second = hash_password("pw123").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_malformed_hash() {
        assert!(verify_password("pw123", "pw123").is_err());
    }
}
