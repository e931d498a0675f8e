use std::str::FromStr;
use std::sync::Arc;
use solana_sdk::pubkey::Pubkey;
use tracing::{debug, info, warn};

use super::{AccountSummary, PoolVersion, PoolVersionReport, VersionInspection};
use crate::infrastructure::blockchain::{parse_version_tag, AccountSource};

/// Identifies the pool program version from the version tag of a pool account
pub struct PoolVersionInspector {
    source: Arc<dyn AccountSource>,
}

impl PoolVersionInspector {
    pub fn new(source: Arc<dyn AccountSource>) -> Self {
        Self { source }
    }

    /// Never fails: every failure is reported as a variant of [`VersionInspection`].
    pub async fn inspect(&self, address: &str) -> VersionInspection {
        let pubkey = match Pubkey::from_str(address) {
            Ok(pubkey) => pubkey,
            Err(e) => return VersionInspection::DecodeError(format!("invalid pool address {}: {}", address, e)),
        };

        debug!("Inspecting pool version for {}", pubkey);

        let account = match self.source.get_account_info(&pubkey).await {
            Ok(Some(account)) => account,
            Ok(None) => {
                warn!("Pool {} not found", pubkey);
                return VersionInspection::NotFound;
            }
            Err(e) => return VersionInspection::TransportError(e.to_string()),
        };

        let tag = match parse_version_tag(&account.data) {
            Ok(tag) => tag,
            Err(e) => return VersionInspection::DecodeError(e.to_string()),
        };

        let version = PoolVersion::from_tag(&tag);
        info!("Pool {} version tag {} ({})", pubkey, tag, version);

        VersionInspection::Found(PoolVersionReport {
            version_hex: tag.to_hex(),
            version,
            account: AccountSummary {
                owner: account.owner,
                lamports: account.lamports,
                data_len: account.data_len(),
            },
        })
    }
}
