// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Provider list entries.

use alloc::boxed::Box;

use crate::wrap::Wrap;

/// One element of a provider list.
///
/// An entry is either a bare wrapper, which is invoked without configuration
/// and falls back to its own defaults, or a wrapper paired with the
/// configuration it should be invoked with.
///
/// ```rust
/// use understory_provider::Entry;
///
/// let bare: Entry<&str, u8> = Entry::bare("Language");
/// let configured: Entry<&str, u8> = ("Theme", 2).into();
///
/// assert_eq!(bare.parts(), (&"Language", None));
/// assert_eq!(configured.parts(), (&"Theme", Some(&2)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Entry<W, C> {
    /// A wrapper invoked with no configuration.
    Bare(W),
    /// A wrapper invoked with the given configuration.
    WithConfig(W, C),
}

/// An [`Entry`] holding a boxed wrapper, for lists mixing wrapper types.
///
/// All wrappers in one list share the host's node, configuration, and error
/// types.
pub type DynEntry<'a, N, C, E> = Entry<Box<dyn Wrap<N, Config = C, Error = E> + 'a>, C>;

impl<W, C> Entry<W, C> {
    /// Creates an entry that invokes `wrapper` with no configuration.
    #[inline]
    pub const fn bare(wrapper: W) -> Self {
        Self::Bare(wrapper)
    }

    /// Creates an entry that invokes `wrapper` with `config`.
    #[inline]
    pub const fn with_config(wrapper: W, config: C) -> Self {
        Self::WithConfig(wrapper, config)
    }

    /// Returns the wrapper.
    #[must_use]
    #[inline]
    pub fn wrapper(&self) -> &W {
        match self {
            Self::Bare(w) | Self::WithConfig(w, _) => w,
        }
    }

    /// Returns the configuration, or `None` for a bare entry.
    #[must_use]
    #[inline]
    pub fn config(&self) -> Option<&C> {
        match self {
            Self::Bare(_) => None,
            Self::WithConfig(_, c) => Some(c),
        }
    }

    /// Returns `true` if this entry carries a configuration.
    #[must_use]
    #[inline]
    pub fn is_configured(&self) -> bool {
        matches!(self, Self::WithConfig(..))
    }

    /// Splits the entry into its wrapper and optional configuration.
    #[must_use]
    #[inline]
    pub fn parts(&self) -> (&W, Option<&C>) {
        match self {
            Self::Bare(w) => (w, None),
            Self::WithConfig(w, c) => (w, Some(c)),
        }
    }

    /// Owned form of [`parts`](Self::parts).
    #[must_use]
    #[inline]
    pub fn into_parts(self) -> (W, Option<C>) {
        match self {
            Self::Bare(w) => (w, None),
            Self::WithConfig(w, c) => (w, Some(c)),
        }
    }

    /// Converts the wrapper, keeping the configuration.
    ///
    /// This is how concrete wrappers are erased into a [`DynEntry`]:
    ///
    /// ```rust
    /// use core::convert::Infallible;
    /// use understory_provider::{DynEntry, Entry, Wrap, wrap_fn};
    ///
    /// let italic = wrap_fn(|_: Option<&()>, c: String| Ok::<_, Infallible>(format!("<i>{c}</i>")));
    /// let entry: DynEntry<'_, String, (), Infallible> = Entry::bare(italic)
    ///     .map_wrapper(|w| Box::new(w) as Box<dyn Wrap<String, Config = (), Error = Infallible>>);
    /// assert!(!entry.is_configured());
    /// ```
    #[inline]
    pub fn map_wrapper<V>(self, f: impl FnOnce(W) -> V) -> Entry<V, C> {
        match self {
            Self::Bare(w) => Entry::Bare(f(w)),
            Self::WithConfig(w, c) => Entry::WithConfig(f(w), c),
        }
    }
}

impl<W, C> From<(W, C)> for Entry<W, C> {
    #[inline]
    fn from((wrapper, config): (W, C)) -> Self {
        Self::WithConfig(wrapper, config)
    }
}
