use crate::{ACCEPTED_LOGIN, ACCEPTED_PASSWORD};

/// Function to check a credential pair against the accepted one.
///
/// Plain case-sensitive equality; callers trim the input beforehand.
pub fn credentials_match(login: &str, password: &str) -> bool {
    login == ACCEPTED_LOGIN && password == ACCEPTED_PASSWORD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_match() {
        assert!(credentials_match("admin", "admin"));

        assert!(!credentials_match("admin", "wrong"));
        assert!(!credentials_match("", ""));
        assert!(!credentials_match("Admin", "admin")); // Case mismatch
        assert!(!credentials_match("admin", "ADMIN"));
        assert!(!credentials_match(" admin", "admin")); // No trimming here
        assert!(!credentials_match("admin", "admin "));
    }
}
