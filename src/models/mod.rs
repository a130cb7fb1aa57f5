//! Display models for CLI output

pub mod display;

pub use display::{MemberDisplay, OrgDisplay, SecretKeyDisplay};
