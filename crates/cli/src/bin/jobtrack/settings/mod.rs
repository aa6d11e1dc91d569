//! Configuration loading and resolution.
//!
//! Files and environment variables are merged into a [`raw::RawConfig`], CLI
//! flags are laid on top, and [`load`] validates the result into a
//! [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;

pub(crate) use loader::load;
pub(crate) use resolved::ResolvedConfig;
