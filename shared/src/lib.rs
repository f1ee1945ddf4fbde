//! Data shared by the Folio page server and the in-browser page script.
//!
//! - [`profile`]: the portfolio profile document and its validation.
//! - [`markers`]: class, id and attribute names the rendered page exposes.
//! - [`aggregate_skills`]: the skill list shown on the page and used as the
//!   set of project filters.

pub mod markers;
pub mod profile;
mod skills;

#[cfg(not(target_arch = "wasm32"))]
pub use profile::load_profile;
pub use profile::{
    parse_profile, validate_profile, ColorScheme, Contact, Profile, ProfileError, Project,
    SocialLink,
};
pub use skills::aggregate_skills;
