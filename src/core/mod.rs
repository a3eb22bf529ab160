//! Framework-independent logic: waitlist form state, validation, reveal
//! animation policy and page copy

#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod reveal;
#[cfg(test)]
mod tests;
pub mod validation;
pub mod waitlist;

pub use reveal::{
    AnimationCue, CubicBezier, RevealAnimation, RevealEvent, RevealFrame, RevealObserver,
    RevealTrigger, ViewportMargin, stagger_delay,
};
pub use validation::WaitlistError;
pub use waitlist::{FormPhase, WaitlistEntry, WaitlistFields, WaitlistState};
