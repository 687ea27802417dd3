//! Language profiles.
//!
//! Each profile is an ordered [`RuleSet`](crate::RuleSet) built from a table of
//! constants and lexical lists.
//!
//! # Available Profiles
//!
//! Enable profiles via Cargo features:
//! - `english-canadian` - Canadian English (enabled by default)

#[cfg(feature = "english-canadian")]
pub mod english_canadian;
