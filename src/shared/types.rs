//! Common types used across the application

use solana_sdk::account::Account;
use solana_sdk::pubkey::Pubkey;

/// Account state as returned by the RPC node.
/// An absent account is represented by `None` at the call site, never by an empty snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSnapshot {
    pub data: Vec<u8>,
    pub owner: Option<Pubkey>,
    pub lamports: u64,
}

impl AccountSnapshot {
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            owner: None,
            lamports: 0,
        }
    }

    pub fn data_len(&self) -> usize {
        self.data.len()
    }
}

impl From<Account> for AccountSnapshot {
    fn from(account: Account) -> Self {
        Self {
            data: account.data,
            owner: Some(account.owner),
            lamports: account.lamports,
        }
    }
}
