use argon2::{
    password_hash::{self, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use rand_core::OsRng;

pub fn check_pass(real: &str, input: &str) -> bool {
    match PasswordHash::new(real) {
        Ok(parsed_hash) => Argon2::default()
            .verify_password(input.as_bytes(), &parsed_hash)
            .map_or(false, |_| true),
        Err(_) => false,
    }
}

pub fn hash_pass(input: &str) -> Result<String, password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(input.as_bytes(), &salt)
        .map(|hash| hash.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashed_password_verifies() {
        let hash = hash_pass("hunter2").unwrap();
        assert_ne!(hash, "hunter2");
        assert!(check_pass(&hash, "hunter2"));
        assert!(!check_pass(&hash, "hunter3"));
    }

    #[test]
    fn plaintext_in_db_never_matches() {
        assert!(!check_pass("hunter2", "hunter2"));
    }
}
