//! UUID generation.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use uuid::{Context, Timestamp, Uuid};

use crate::error::{Error, Result};

/// Supported UUID versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UuidVersion {
    /// Time-based, with a per-process random node id.
    V1,
    /// Random (default).
    #[default]
    V4,
}

impl fmt::Display for UuidVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UuidVersion::V1 => write!(f, "v1"),
            UuidVersion::V4 => write!(f, "v4"),
        }
    }
}

impl FromStr for UuidVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "v1" | "1" => Ok(UuidVersion::V1),
            "v4" | "4" | "" => Ok(UuidVersion::V4),
            _ => Err(Error::Conversion(format!("Unknown uuid version: {}", s))),
        }
    }
}

/// Generate a hyphenated lowercase UUID of the given version.
pub fn uuid(version: UuidVersion) -> String {
    match version {
        UuidVersion::V1 => {
            let ts = Timestamp::now(clock_context());
            Uuid::new_v1(ts, node_id()).to_string()
        }
        UuidVersion::V4 => Uuid::new_v4().to_string(),
    }
}

fn clock_context() -> &'static Context {
    static CONTEXT: OnceLock<Context> = OnceLock::new();
    CONTEXT.get_or_init(|| Context::new(rand::random()))
}

/// Random node id with the multicast bit set, as RFC 4122 requires for
/// ids that are not real MAC addresses.
fn node_id() -> &'static [u8; 6] {
    static NODE: OnceLock<[u8; 6]> = OnceLock::new();
    NODE.get_or_init(|| {
        let mut node: [u8; 6] = rand::random();
        node[0] |= 0x01;
        node
    })
}
