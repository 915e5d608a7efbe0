//! Presentation state driven by timers and the viewport scroll position.
//!
//! Every behaviour here owns its own state and holds its timer or listener
//! through a [`Subscription`]. Dropping the subscription releases the
//! underlying resource, so unmounting a component is enough to stop it.

pub mod carousel;
pub mod hooks;
pub mod reveal;
pub mod scroll;
pub mod timer;
pub mod view;

mod subscription;

pub use subscription::Subscription;
