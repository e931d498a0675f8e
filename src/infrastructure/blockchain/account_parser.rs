//! Fixed-offset parsers for pool account data

use std::str::FromStr;
use serde_json::Value;
use solana_sdk::pubkey::Pubkey;
use tracing::debug;

use crate::domain::pool::VersionTag;
use crate::shared::errors::PoolError;

pub const PROGRAM_ID_LEN: usize = 32;
pub const VERSION_TAG_LEN: usize = 4;

/// Read the market program id from the leading 32 bytes of pool data.
/// Returns `None` when the buffer is too short.
pub fn parse_program_id(data: &[u8]) -> Option<Pubkey> {
    let bytes: [u8; PROGRAM_ID_LEN] = data.get(..PROGRAM_ID_LEN)?.try_into().ok()?;
    Some(Pubkey::new_from_array(bytes))
}

/// Read the version tag from the leading 4 bytes of pool data
pub fn parse_version_tag(data: &[u8]) -> Result<VersionTag, PoolError> {
    let bytes: [u8; VERSION_TAG_LEN] = data
        .get(..VERSION_TAG_LEN)
        .and_then(|prefix| prefix.try_into().ok())
        .ok_or_else(|| {
            PoolError::Decode(format!(
                "account data is {} bytes, need at least {} for the version tag",
                data.len(),
                VERSION_TAG_LEN
            ))
        })?;

    Ok(VersionTag::new(bytes))
}

/// Extract `marketProgramId` from a legacy `getAccountInfo` envelope,
/// where `result.value.data[0]` holds a JSON document.
pub fn parse_legacy_market_program_id(envelope: &Value, address: &str) -> Result<Pubkey, PoolError> {
    let value = envelope
        .get("result")
        .and_then(|result| result.get("value"))
        .ok_or_else(|| PoolError::MalformedResponse("missing result.value".to_string()))?;

    if value.is_null() {
        return Err(PoolError::AccountNotFound(address.to_string()));
    }

    let payload = value
        .get("data")
        .and_then(|data| data.get(0))
        .and_then(Value::as_str)
        .ok_or_else(|| PoolError::MalformedResponse("result.value.data[0] is not a string".to_string()))?;

    debug!("Legacy payload for {}: {} bytes", address, payload.len());

    let decoded: Value = serde_json::from_str(payload)
        .map_err(|e| PoolError::Decode(format!("account data is not JSON: {}", e)))?;

    let market_program_id = decoded
        .get("marketProgramId")
        .and_then(Value::as_str)
        .ok_or_else(|| PoolError::MalformedResponse("marketProgramId missing from account data".to_string()))?;

    Pubkey::from_str(market_program_id)
        .map_err(|e| PoolError::Decode(format!("invalid marketProgramId {}: {}", market_program_id, e)))
}
