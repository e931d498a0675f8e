//! Pool domain - program id resolution and version inspection

mod program_resolver;
mod version_inspector;

pub use program_resolver::PoolProgramResolver;
pub use version_inspector::PoolVersionInspector;

use std::fmt;
use solana_sdk::pubkey::Pubkey;
use crate::shared::utils::to_hex;

/// Known version tags and their labels
pub const KNOWN_VERSION_TAGS: &[([u8; 4], PoolVersion)] = &[
    ([0xf7, 0xed, 0xe3, 0xf5], PoolVersion::V4),
    ([0x05, 0x95, 0x3c, 0x85], PoolVersion::V3),
    ([0x00, 0x00, 0x00, 0x01], PoolVersion::V2),
];

/// Leading 4 bytes of a pool account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VersionTag([u8; 4]);

impl VersionTag {
    pub fn new(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        to_hex(&self.0)
    }
}

impl fmt::Display for VersionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Pool program version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolVersion {
    V4,
    V3,
    V2,
    Unknown,
}

impl PoolVersion {
    pub fn from_tag(tag: &VersionTag) -> Self {
        KNOWN_VERSION_TAGS
            .iter()
            .find(|(bytes, _)| bytes == tag.as_bytes())
            .map(|(_, version)| *version)
            .unwrap_or(PoolVersion::Unknown)
    }

    pub fn label(&self) -> &'static str {
        match self {
            PoolVersion::V4 => "Version 4",
            PoolVersion::V3 => "Version 3",
            PoolVersion::V2 => "Version 2",
            PoolVersion::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for PoolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where a resolved program id came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    /// Leading 32 bytes of the pool account data
    AccountData,
    /// `marketProgramId` of a legacy JSON account payload
    LegacyJson,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProgramId {
    pub program_id: Pubkey,
    pub source: ResolutionSource,
}

impl ResolvedProgramId {
    /// Base-58 form, as written to the output file
    pub fn encoded(&self) -> String {
        self.program_id.to_string()
    }
}

/// Account details reported alongside a version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSummary {
    pub owner: Option<Pubkey>,
    pub lamports: u64,
    pub data_len: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolVersionReport {
    pub version_hex: String,
    pub version: PoolVersion,
    pub account: AccountSummary,
}

impl PoolVersionReport {
    pub fn label(&self) -> &'static str {
        self.version.label()
    }
}

/// Outcome of a version inspection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionInspection {
    Found(PoolVersionReport),
    NotFound,
    TransportError(String),
    DecodeError(String),
}

impl VersionInspection {
    /// `(hex, label)` pair when a version was read
    pub fn version(&self) -> Option<(&str, &'static str)> {
        match self {
            VersionInspection::Found(report) => Some((report.version_hex.as_str(), report.label())),
            _ => None,
        }
    }
}
