//! Random identifiers for correlation ids and object keys

use uuid::Uuid;

const SHORT_ID_MIN: u128 = 100_000_000;
const SHORT_ID_SPAN: u128 = 900_000_000;

/// Generates random string identifiers
pub struct IdGenerator;

impl IdGenerator {
    /// Nine-digit decimal id, e.g. `"423945219"`
    ///
    /// Not globally unique; fine for correlation ids.
    pub fn next_short() -> String {
        (SHORT_ID_MIN + Uuid::new_v4().as_u128() % SHORT_ID_SPAN).to_string()
    }

    /// 32-character lowercase hex id from a random UUID
    pub fn next_long() -> String {
        Uuid::new_v4().simple().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_short() {
        let id = IdGenerator::next_short();
        assert_eq!(id.len(), 9);
        assert!(id.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_next_long() {
        let id = IdGenerator::next_long();
        assert_eq!(id.len(), 32);
        assert!(id.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
        assert_ne!(id, IdGenerator::next_long());
    }
}
