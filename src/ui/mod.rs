pub mod icon;
pub mod pages;
pub mod reveal;
pub mod waitlist_form;

pub use icon::{Icon, IconKind};
pub use reveal::{Reveal, RevealGroup};
pub use waitlist_form::{FormStyle, WaitlistForm};
