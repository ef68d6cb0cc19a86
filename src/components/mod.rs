//! UI Components for Gamer Tags.
//!
//! Page-level pieces composed by `App`. Generic widgets live in the
//! `gamertags-ui` crate.

mod action_bar;
mod profile_card;
mod tag_form;

pub use action_bar::ActionBar;
pub use profile_card::ProfileCard;
pub use tag_form::TagForm;
