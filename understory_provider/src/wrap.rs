// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The wrapping capability supplied by the host framework.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::sync::Arc;
use core::fmt;
use core::marker::PhantomData;

/// A unit that renders a nested child inside itself.
///
/// `N` is the host framework's node type. A wrapper receives its configuration
/// (or `None` when it was listed bare, in which case it applies its own
/// defaults) and the already-composed child, and returns a new node that
/// embeds the child.
///
/// The child is only ever passed as `child`; a configuration never carries
/// the nested content.
///
/// # Example
///
/// ```rust
/// use core::convert::Infallible;
/// use understory_provider::Wrap;
///
/// struct Div;
///
/// impl Wrap<String> for Div {
///     type Config = &'static str;
///     type Error = Infallible;
///
///     fn wrap(&self, config: Option<&&'static str>, child: String) -> Result<String, Infallible> {
///         let class = config.copied().unwrap_or("plain");
///         Ok(format!("<div class={class}>{child}</div>"))
///     }
/// }
///
/// let Ok(node) = Div.wrap(None, "hi".into());
/// assert_eq!(node, "<div class=plain>hi</div>");
/// ```
pub trait Wrap<N> {
    /// Named inputs accepted by this wrapper, excluding the child.
    type Config;
    /// Failure raised when the wrapper cannot be invoked.
    type Error;

    /// Produces a node that embeds `child`.
    fn wrap(&self, config: Option<&Self::Config>, child: N) -> Result<N, Self::Error>;
}

impl<N, T: Wrap<N> + ?Sized> Wrap<N> for &T {
    type Config = T::Config;
    type Error = T::Error;

    #[inline]
    fn wrap(&self, config: Option<&Self::Config>, child: N) -> Result<N, Self::Error> {
        (**self).wrap(config, child)
    }
}

impl<N, T: Wrap<N> + ?Sized> Wrap<N> for Box<T> {
    type Config = T::Config;
    type Error = T::Error;

    #[inline]
    fn wrap(&self, config: Option<&Self::Config>, child: N) -> Result<N, Self::Error> {
        (**self).wrap(config, child)
    }
}

impl<N, T: Wrap<N> + ?Sized> Wrap<N> for Rc<T> {
    type Config = T::Config;
    type Error = T::Error;

    #[inline]
    fn wrap(&self, config: Option<&Self::Config>, child: N) -> Result<N, Self::Error> {
        (**self).wrap(config, child)
    }
}

impl<N, T: Wrap<N> + ?Sized> Wrap<N> for Arc<T> {
    type Config = T::Config;
    type Error = T::Error;

    #[inline]
    fn wrap(&self, config: Option<&Self::Config>, child: N) -> Result<N, Self::Error> {
        (**self).wrap(config, child)
    }
}

/// A [`Wrap`] implemented by a closure. Built with [`wrap_fn`].
pub struct WrapFn<F, C> {
    f: F,
    _config: PhantomData<fn(&C)>,
}

impl<F: Clone, C> Clone for WrapFn<F, C> {
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            _config: PhantomData,
        }
    }
}

impl<F: Copy, C> Copy for WrapFn<F, C> {}

impl<F, C> fmt::Debug for WrapFn<F, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WrapFn")
            .field("config", &core::any::type_name::<C>())
            .finish_non_exhaustive()
    }
}

/// Adapts a closure into a [`Wrap`] with configuration type `C`.
///
/// ```rust
/// use core::convert::Infallible;
/// use understory_provider::{Wrap, wrap_fn};
///
/// let bold = wrap_fn(|_: Option<&()>, child: String| Ok::<_, Infallible>(format!("<b>{child}</b>")));
/// let Ok(node) = bold.wrap(None, "x".into());
/// assert_eq!(node, "<b>x</b>");
/// ```
pub fn wrap_fn<N, C, E, F>(f: F) -> WrapFn<F, C>
where
    F: Fn(Option<&C>, N) -> Result<N, E>,
{
    WrapFn {
        f,
        _config: PhantomData,
    }
}

impl<N, C, E, F> Wrap<N> for WrapFn<F, C>
where
    F: Fn(Option<&C>, N) -> Result<N, E>,
{
    type Config = C;
    type Error = E;

    #[inline]
    fn wrap(&self, config: Option<&C>, child: N) -> Result<N, E> {
        (self.f)(config, child)
    }
}
