//! webpen-session — Live editing state for one playground view
//!
//! A session is plain in-memory state owned by a single view: mutable
//! buffers, an active-tab selector, and a load-lifecycle phase. Nothing
//! here touches the network; the persistence client reads a session's
//! snapshot at save time and writes one back on load.

mod pen;
mod phase;
mod universal;

pub use pen::{PenSession, PenTab};
pub use phase::LoadPhase;
pub use universal::UniversalSession;
