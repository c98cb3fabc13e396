//! Identifier types.
//!
//! Numeric entities (shipments, consumers) get zero-cost typed wrappers so
//! they can be used as map keys and sorted collection elements without
//! ceremony.  Hubs are identified by their administrative **hub code** — a
//! short string assigned outside the simulation — so `HubCode` wraps an
//! `Arc<str>` to keep clones cheap on the routing hot path.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Identifier of a shipment, assigned sequentially by the order generator.
    pub struct ShipmentId(u32);
}

typed_id! {
    /// Identifier of a consumer in the synthetic customer base.
    pub struct ConsumerId(u32);
}

// ── HubCode ───────────────────────────────────────────────────────────────────

/// The administrative code of a hub (e.g. `"RTM"`, `"SIN"`).
///
/// Codes are unique across the network and act as graph node keys.  The
/// inner `Arc<str>` makes clones a reference-count bump, which matters in the
/// Dijkstra frontier where codes are cloned into heap entries.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HubCode(Arc<str>);

impl HubCode {
    pub fn new(code: impl Into<Arc<str>>) -> Self {
        HubCode(code.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `true` for codes that cannot identify a hub (blank or whitespace-only).
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for HubCode {
    fn from(s: &str) -> Self {
        HubCode::new(s)
    }
}

impl From<String> for HubCode {
    fn from(s: String) -> Self {
        HubCode::new(s)
    }
}

impl Borrow<str> for HubCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HubCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
