//! Feature Threshold Table
//!
//! The server versions at which the features this toolkit branches on were
//! introduced, in the same integer encoding as the probed server version.
//! Every comparison in the crate reads from this table; no comparison site
//! carries its own integer.

use strum_macros::{Display, EnumIter};

/// Feature introduction thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
#[repr(u32)]
pub enum Threshold {
    /// Unbreakable moved onto item meta
    UnbreakableMeta = 1110,
    /// The item material flattening
    ItemFlattening = 1130,
    /// Persistent data containers
    PersistentData = 1140,
    /// Rich text components in the extended API
    TextComponents = 1165,
}

impl Threshold {
    /// The encoded server version this threshold compares against
    pub const fn version(self) -> u32 {
        self as u32
    }
}
