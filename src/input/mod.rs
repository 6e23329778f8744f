//! Pointer input plumbing
//!
//! Pointer-down events are scoped to the card's hit region, while moves and
//! releases are global. Global delivery is gated by a [`PointerSubscription`]
//! that lives exactly as long as a drag does.

pub mod hit_region;
pub mod subscription;

pub use hit_region::{Anywhere, HitRegion, ScreenRect};
pub use subscription::{PointerHub, PointerSubscription};

/// What a handler did with a pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDisposition {
    /// The event must not propagate to any ancestor handler
    Consumed,
    /// The handler did not act on the event
    Ignored,
}

impl EventDisposition {
    pub fn is_consumed(self) -> bool {
        matches!(self, EventDisposition::Consumed)
    }
}
