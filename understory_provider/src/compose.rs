// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nesting a provider list around a child.
//!
//! [`compose`] is the fold itself. [`ProviderComposer`] is the same operation
//! shaped like a component (`providers` plus `children`), and
//! [`compose_providers`] captures a list once and returns a reusable
//! [`Composed`].

use alloc::sync::Arc;
use core::fmt;

use crate::entry::Entry;
use crate::wrap::Wrap;

/// Nests `content` inside every wrapper in `entries`.
///
/// The first entry becomes the outermost ancestor and the last entry the
/// innermost, directly around `content`. Entries are visited last to first,
/// each one wrapping the node produced by the entry after it.
///
/// An empty list returns `content` unchanged.
///
/// # Errors
///
/// Returns the first error raised by a wrapper, unchanged. Wrappers nearer
/// the root than the failing one are not invoked.
///
/// # Example
///
/// ```rust
/// use core::convert::Infallible;
/// use understory_provider::{Entry, compose, wrap_fn};
///
/// let tag = |name: &'static str| {
///     wrap_fn(move |attr: Option<&&'static str>, child: String| {
///         Ok::<_, Infallible>(match attr {
///             Some(a) => format!("<{name} {a}>{child}</{name}>"),
///             None => format!("<{name}>{child}</{name}>"),
///         })
///     })
/// };
///
/// let providers = [
///     Entry::with_config(tag("theme"), "dark"),
///     Entry::bare(tag("auth")),
/// ];
/// let Ok(node) = compose(&providers, String::from("app"));
/// assert_eq!(node, "<theme dark><auth>app</auth></theme>");
/// ```
pub fn compose<'a, N, W, I>(entries: I, content: N) -> Result<N, W::Error>
where
    W: Wrap<N> + 'a,
    W::Config: 'a,
    I: IntoIterator<Item = &'a Entry<W, W::Config>>,
    I::IntoIter: DoubleEndedIterator,
{
    // Distance from `content`, counted outward.
    #[cfg(feature = "tracing")]
    let mut depth = 0_usize;
    entries.into_iter().try_rfold(content, |child, entry| {
        let (wrapper, config) = entry.parts();
        #[cfg(feature = "tracing")]
        tracing::trace!(depth, configured = config.is_some(), "wrapping child");
        let node = wrapper.wrap(config, child);
        #[cfg(feature = "tracing")]
        let node = node.inspect_err(|_| tracing::debug!(depth, "wrapper failed"));
        #[cfg(feature = "tracing")]
        {
            depth += 1;
        }
        node
    })
}

/// A provider list and the children to nest inside it.
///
/// This is [`compose`] in component form, for call sites that build a node
/// from named inputs.
///
/// ```rust
/// use core::convert::Infallible;
/// use understory_provider::{Entry, ProviderComposer, wrap_fn};
///
/// let quote = wrap_fn(|_: Option<&()>, child: String| Ok::<_, Infallible>(format!("'{child}'")));
/// let providers = [Entry::bare(&quote), Entry::bare(&quote)];
///
/// let Ok(node) = ProviderComposer {
///     providers: &providers,
///     children: String::from("hi"),
/// }
/// .render();
/// assert_eq!(node, "''hi''");
/// ```
#[derive(Debug)]
pub struct ProviderComposer<'a, W, C, N> {
    /// Providers, outermost first.
    pub providers: &'a [Entry<W, C>],
    /// Content nested inside all providers.
    pub children: N,
}

impl<W, C, N> ProviderComposer<'_, W, C, N>
where
    W: Wrap<N, Config = C>,
{
    /// Composes the providers around the children.
    ///
    /// # Errors
    ///
    /// Returns the first wrapper error, as [`compose`] does.
    pub fn render(self) -> Result<N, W::Error> {
        compose(self.providers, self.children)
    }
}

/// A provider list captured for reuse.
///
/// Created by [`compose_providers`]. The entries are shared, not copied:
/// cloning a `Composed` is cheap and every clone renders the same list.
///
/// `Composed` is itself a [`Wrap`] taking no configuration, so a reusable
/// group can be listed as a single entry of another composition.
pub struct Composed<W, C> {
    entries: Arc<[Entry<W, C>]>,
}

/// Captures `entries` and returns a reusable composition of them.
///
/// ```rust
/// use core::convert::Infallible;
/// use understory_provider::{Entry, compose_providers, wrap_fn};
///
/// let brackets = wrap_fn(|_: Option<&()>, child: String| Ok::<_, Infallible>(format!("[{child}]")));
/// let app_providers = compose_providers(vec![Entry::bare(brackets)]);
///
/// let Ok(first) = app_providers.render(String::from("a"));
/// let Ok(second) = app_providers.render(String::from("a"));
/// assert_eq!(first, "[a]");
/// assert_eq!(first, second);
/// ```
pub fn compose_providers<W, C>(entries: impl Into<Arc<[Entry<W, C>]>>) -> Composed<W, C> {
    Composed {
        entries: entries.into(),
    }
}

impl<W, C> Composed<W, C> {
    /// Returns the captured entries, outermost first.
    #[must_use]
    #[inline]
    pub fn entries(&self) -> &[Entry<W, C>] {
        &self.entries
    }

    /// Returns the number of captured entries.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entries were captured.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Composes the captured entries around `children`.
    ///
    /// # Errors
    ///
    /// Returns the first wrapper error, as [`compose`] does.
    pub fn render<N>(&self, children: N) -> Result<N, W::Error>
    where
        W: Wrap<N, Config = C>,
    {
        compose(self.entries.iter(), children)
    }
}

impl<W, C> Clone for Composed<W, C> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<W: fmt::Debug, C: fmt::Debug> fmt::Debug for Composed<W, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Composed")
            .field("entries", &&*self.entries)
            .finish()
    }
}

impl<N, W, C> Wrap<N> for Composed<W, C>
where
    W: Wrap<N, Config = C>,
{
    type Config = ();
    type Error = W::Error;

    #[inline]
    fn wrap(&self, _config: Option<&()>, child: N) -> Result<N, W::Error> {
        self.render(child)
    }
}
