//! Utility functions and helpers

/// Encode raw bytes as a base-58 string
pub fn encode_base58(bytes: &[u8]) -> String {
    bs58::encode(bytes).into_string()
}

/// Format a byte slice as lowercase hex
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Generate unique ID
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base58_round_trip() {
        let address = "58oQChx4yWmvKdwLLZzBi4ChoCc2fqCUWBkwMihLYQo2";
        let bytes = bs58::decode(address).into_vec().unwrap();
        assert_eq!(bytes.len(), 32);
        assert_eq!(encode_base58(&bytes), address);
    }

    #[test]
    fn test_decode_rejects_invalid_alphabet() {
        // '0', 'O', 'I' and 'l' are outside the base-58 alphabet
        assert!(bs58::decode("0OIl").into_vec().is_err());
    }

    #[test]
    fn test_to_hex_is_lowercase() {
        assert_eq!(to_hex(&[0xAA, 0xBB, 0x0C, 0x01]), "aabb0c01");
    }

    #[test]
    fn test_generate_id_is_unique() {
        assert_ne!(generate_id(), generate_id());
    }
}
