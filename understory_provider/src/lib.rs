// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_provider --heading-base-level=0

//! Understory Provider: flatten nested wrapper components into a list.
//!
//! ## Overview
//!
//! UI trees often stack several provider-like components (themes, sessions,
//! localization, routers), each of which only renders its child inside
//! itself. Written by hand this grows sideways:
//!
//! ```text
//! Theme(dark)
//!   User(Jane)
//!     Language
//!       App
//! ```
//!
//! This crate takes the same wrappers as an ordered list, outermost first,
//! and nests them around a child for you.
//!
//! ## Concepts
//!
//! - [`Wrap`]: the capability the host framework supplies. A wrapper takes an
//!   optional configuration and a child node and returns a node embedding the
//!   child. Implemented for references, `Box`, `Rc`, `Arc`, and closures via
//!   [`wrap_fn`].
//! - [`Entry`]: a list element, either [`Entry::Bare`] (no configuration, the
//!   wrapper applies its defaults) or [`Entry::WithConfig`].
//! - [`compose`]: folds a list from its last entry to its first, so the first
//!   entry ends up as the root and the last directly around the child.
//! - [`ProviderComposer`]: the same fold in component form.
//! - [`compose_providers`]: captures a list once and returns a reusable
//!   [`Composed`], which is itself a [`Wrap`].
//!
//! ## Errors
//!
//! There is no error type of its own. Whatever a wrapper returns as
//! [`Wrap::Error`] is passed through unchanged, and composition stops at the
//! first failure. Hosts that cannot fail use [`core::convert::Infallible`].
//!
//! ## Example
//!
//! ```rust
//! use core::convert::Infallible;
//! use understory_provider::{Entry, Wrap, compose_providers};
//!
//! struct Provider(&'static str);
//!
//! impl Wrap<String> for Provider {
//!     type Config = String;
//!     type Error = Infallible;
//!
//!     fn wrap(&self, config: Option<&String>, child: String) -> Result<String, Infallible> {
//!         let value = config.map_or("default", String::as_str);
//!         Ok(format!("<{} value={value}>{child}</{}>", self.0, self.0))
//!     }
//! }
//!
//! let app_providers = compose_providers(vec![
//!     Entry::with_config(Provider("theme"), "dark".to_string()),
//!     Entry::with_config(Provider("user"), "Jane".to_string()),
//!     Entry::bare(Provider("language")),
//! ]);
//!
//! let Ok(tree) = app_providers.render(String::from("app"));
//! assert_eq!(
//!     tree,
//!     "<theme value=dark><user value=Jane><language value=default>app</language></user></theme>"
//! );
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit [`tracing`](https://docs.rs/tracing) events for each
//!   wrapper invocation and failure.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod compose;
mod entry;
mod wrap;

pub use compose::{Composed, ProviderComposer, compose, compose_providers};
pub use entry::{DynEntry, Entry};
pub use wrap::{Wrap, WrapFn, wrap_fn};
