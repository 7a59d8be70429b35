//! Handles for residents, furniture and job rungs.
//!
//! Residents are addressed by a stable [`AgentId`] handed out at move-in and
//! never recycled, so relationships and saves can name someone who has since
//! moved along in the store.  [`ObjectId`] and [`JobId`] are plain positions
//! in the frozen `ObjectCatalog` and `JobRegistry`.

use std::fmt;

macro_rules! town_id {
    ($(#[$attr:meta])* $name:ident($repr:ty), $tag:literal) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(pub $repr);

        impl $name {
            /// Slot in the backing `Vec`.
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($tag, "#{}"), self.0)
            }
        }
    };
}

town_id! {
    /// A resident.
    AgentId(u32), "agent"
}

town_id! {
    /// A piece of furniture in the `ObjectCatalog`.
    ObjectId(u32), "object"
}

town_id! {
    /// A rung on a career ladder.  `JobId(0)` is the unemployed sentinel.
    JobId(u16), "job"
}
