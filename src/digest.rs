use zeroize::{Zeroize, ZeroizeOnDrop};

/// An opaque password digest, as produced by the application's own password
/// hashing. The policy library never sees plaintext passwords; it only
/// compares stored digests for value equality. Use `PasswordDigest::from` to
/// convert a `String` to a `PasswordDigest`, and `digest.expose()` to access
/// the string value where necessary (e.g. when persisting a history record).
///
/// Digests are redacted in `std::fmt::Debug` displays, are compared in
/// constant time, and are automatically zeroed-out in memory when the value
/// is dropped.
#[cfg_attr(feature = "diesel", derive(diesel_derive_newtype::DieselNewType))]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type), sqlx(transparent))]
pub struct PasswordDigest(pub(crate) String);

impl PasswordDigest {
    /// Make use of this digest as a `&str`. This may be needed when storing a
    /// history record in the database.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl Drop for PasswordDigest {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl ZeroizeOnDrop for PasswordDigest {}

impl Clone for PasswordDigest {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl PartialEq for PasswordDigest {
    /// Digest equality is value equality on the stored representation,
    /// compared in constant time.
    fn eq(&self, other: &Self) -> bool {
        constant_time_eq::constant_time_eq(self.0.as_bytes(), other.0.as_bytes())
    }
}

impl Eq for PasswordDigest {}

impl From<String> for PasswordDigest {
    fn from(string: String) -> Self {
        Self(string)
    }
}

impl std::fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[DIGEST]")
    }
}

impl<'de> serde::Deserialize<'de> for PasswordDigest {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer)
            .map(Self::from)
    }
}

#[cfg(test)]
mod test {
    use super::PasswordDigest;

    #[test]
    fn test_equality_is_by_value() {
        let a = PasswordDigest::from("abc123".to_string());
        let b = PasswordDigest::from("abc123".to_string());
        let c = PasswordDigest::from("something else".to_string());

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_debug_is_redacted() {
        let digest = PasswordDigest::from("abc123".to_string());
        assert_eq!("[DIGEST]", format!("{digest:?}"));
    }
}
