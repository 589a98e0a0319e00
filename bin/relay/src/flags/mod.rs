//! CLI flags.

mod globals;
pub(crate) use globals::GlobalArgs;
