use std::str::FromStr;
use std::sync::Arc;
use solana_sdk::pubkey::Pubkey;
use tracing::{debug, info, warn};

use super::{ResolutionSource, ResolvedProgramId};
use crate::infrastructure::blockchain::{parse_legacy_market_program_id, parse_program_id, AccountSource};
use crate::infrastructure::ProgramIdWriter;
use crate::shared::errors::PoolError;

/// Resolves the market program id stored at the head of a pool account
pub struct PoolProgramResolver {
    source: Arc<dyn AccountSource>,
    writer: Option<ProgramIdWriter>,
    legacy_fallback: bool,
}

impl PoolProgramResolver {
    pub fn new(source: Arc<dyn AccountSource>) -> Self {
        Self {
            source,
            writer: None,
            legacy_fallback: true,
        }
    }

    /// Persist every id resolved from account data through `writer`
    pub fn with_writer(mut self, writer: ProgramIdWriter) -> Self {
        self.writer = Some(writer);
        self
    }

    pub fn with_legacy_fallback(mut self, enabled: bool) -> Self {
        self.legacy_fallback = enabled;
        self
    }

    pub async fn resolve(&self, address: &str) -> Result<ResolvedProgramId, PoolError> {
        let pubkey = Pubkey::from_str(address)
            .map_err(|e| PoolError::InvalidAddress(format!("{}: {}", address, e)))?;

        debug!("Resolving market program id for pool {}", pubkey);

        let account = self.source.get_account_info(&pubkey).await?;

        if let Some(program_id) = account.as_ref().and_then(|account| parse_program_id(&account.data)) {
            let resolved = ResolvedProgramId {
                program_id,
                source: ResolutionSource::AccountData,
            };

            if let Some(writer) = &self.writer {
                writer.write(&resolved.encoded()).map_err(|source| PoolError::Output {
                    path: writer.path().display().to_string(),
                    source,
                })?;
            }

            info!("Pool {} market program id: {}", pubkey, program_id);
            return Ok(resolved);
        }

        if !self.legacy_fallback {
            return Err(match account {
                None => PoolError::AccountNotFound(address.to_string()),
                Some(account) => PoolError::MalformedResponse(format!(
                    "account data is {} bytes, need at least 32",
                    account.data.len()
                )),
            });
        }

        warn!("Pool {} has no usable account data, trying legacy JSON payload", pubkey);

        let envelope = self.source.get_account_info_raw(&pubkey).await?;
        let program_id = parse_legacy_market_program_id(&envelope, address)?;

        info!("Pool {} market program id (legacy): {}", pubkey, program_id);
        Ok(ResolvedProgramId {
            program_id,
            source: ResolutionSource::LegacyJson,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use serde_json::json;
    use crate::infrastructure::blockchain::rpc_client::mock::MockAccountSource;
    use crate::shared::utils::{encode_base58, generate_id};

    const POOL: &str = "58oQChx4yWmvKdwLLZzBi4ChoCc2fqCUWBkwMihLYQo2";

    fn scratch_file() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("pool-inspect-{}", generate_id()));
        fs::create_dir_all(&dir).unwrap();
        dir.join("info.txt")
    }

    #[tokio::test]
    async fn test_resolve_reads_leading_32_bytes() {
        let mut data = vec![0x01; 32];
        data.extend_from_slice(b"trailing pool state that must be ignored");
        let resolver = PoolProgramResolver::new(Arc::new(MockAccountSource::with_data(data)));

        let resolved = resolver.resolve(POOL).await.unwrap();

        assert_eq!(resolved.encoded(), encode_base58(&[0x01; 32]));
        assert_eq!(resolved.source, ResolutionSource::AccountData);
    }

    #[tokio::test]
    async fn test_resolve_writes_output_idempotently() {
        let path = scratch_file();
        let data: Vec<u8> = (0u8..64).collect();
        let resolver = PoolProgramResolver::new(Arc::new(MockAccountSource::with_data(data.clone())))
            .with_writer(ProgramIdWriter::new(&path));

        let first = resolver.resolve(POOL).await.unwrap();
        let first_contents = fs::read_to_string(&path).unwrap();
        let second = resolver.resolve(POOL).await.unwrap();
        let second_contents = fs::read_to_string(&path).unwrap();

        assert_eq!(first, second);
        assert_eq!(first_contents, second_contents);
        assert_eq!(first_contents, encode_base58(&data[..32]));
        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[tokio::test]
    async fn test_missing_account_falls_back_to_legacy_json() {
        let program = "9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin";
        let source = Arc::new(MockAccountSource::missing().with_raw(json!({
            "result": { "value": { "data": [format!("{{\"marketProgramId\":\"{}\"}}", program)] } }
        })));
        let path = scratch_file();
        let resolver = PoolProgramResolver::new(source.clone()).with_writer(ProgramIdWriter::new(&path));

        let resolved = resolver.resolve(POOL).await.unwrap();

        assert_eq!(resolved.program_id.to_string(), program);
        assert_eq!(resolved.source, ResolutionSource::LegacyJson);
        assert_eq!(source.raw_call_count(), 1);
        assert!(!path.exists());
        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[tokio::test]
    async fn test_short_account_data_falls_back_to_legacy_json() {
        let program = "srmqPvymJeFKQ4zGQed1GUphjmsamBwRfzUQK8Ax1mm";
        let source = Arc::new(MockAccountSource::with_data(vec![0x01; 16]).with_raw(json!({
            "result": { "value": { "data": [format!("{{\"marketProgramId\":\"{}\"}}", program), "json"] } }
        })));
        let path = scratch_file();
        let resolver = PoolProgramResolver::new(source.clone()).with_writer(ProgramIdWriter::new(&path));

        let resolved = resolver.resolve(POOL).await.unwrap();

        assert_eq!(resolved.program_id.to_string(), program);
        assert_eq!(resolved.source, ResolutionSource::LegacyJson);
        assert_eq!(source.raw_call_count(), 1);
        assert!(!path.exists());
        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[tokio::test]
    async fn test_missing_account_everywhere_is_not_found() {
        let resolver = PoolProgramResolver::new(Arc::new(MockAccountSource::missing()));

        let result = resolver.resolve(POOL).await;
        assert!(matches!(result, Err(PoolError::AccountNotFound(addr)) if addr == POOL));
    }

    #[tokio::test]
    async fn test_short_data_without_fallback_is_malformed() {
        let source = Arc::new(MockAccountSource::with_data(vec![0x01; 16]));
        let resolver = PoolProgramResolver::new(source.clone()).with_legacy_fallback(false);

        let result = resolver.resolve(POOL).await;
        assert!(matches!(result, Err(PoolError::MalformedResponse(_))));
        assert_eq!(source.raw_call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_account_without_fallback_is_not_found() {
        let resolver = PoolProgramResolver::new(Arc::new(MockAccountSource::missing())).with_legacy_fallback(false);

        assert!(matches!(resolver.resolve(POOL).await, Err(PoolError::AccountNotFound(_))));
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let source = Arc::new(MockAccountSource::failing());
        let resolver = PoolProgramResolver::new(source.clone());

        let result = resolver.resolve(POOL).await;
        assert!(matches!(result, Err(PoolError::Transport(_))));
        assert_eq!(source.raw_call_count(), 0);
    }

    #[tokio::test]
    async fn test_invalid_address_rejected_before_fetch() {
        let source = Arc::new(MockAccountSource::with_data(vec![0x01; 32]));
        let resolver = PoolProgramResolver::new(source.clone());

        let result = resolver.resolve("not-a-pool-address").await;
        assert!(matches!(result, Err(PoolError::InvalidAddress(_))));
        assert_eq!(source.account_calls.load(std::sync::atomic::Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unwritable_output_is_output_error() {
        let path = std::env::temp_dir().join(generate_id()).join("info.txt");
        let resolver = PoolProgramResolver::new(Arc::new(MockAccountSource::with_data(vec![0x02; 40])))
            .with_writer(ProgramIdWriter::new(path));

        assert!(matches!(resolver.resolve(POOL).await, Err(PoolError::Output { .. })));
    }
}
