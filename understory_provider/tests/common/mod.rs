// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A minimal host framework for integration tests.
//!
//! Nodes form a tree; context providers make a value visible to their
//! descendants and readers print what they can see. Rendering flattens the
//! tree into a string so nesting order is observable.

#![allow(
    missing_docs,
    reason = "Integration-test helper module; not part of the public API."
)]
#![allow(
    dead_code,
    reason = "Each test binary uses a different subset of the helpers."
)]

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use understory_provider::{DynEntry, Entry, Wrap};

#[derive(Clone, Debug)]
pub(crate) enum Node {
    Text(String),
    Element {
        tag: &'static str,
        attrs: Vec<(&'static str, String)>,
        children: Vec<Node>,
    },
    Provide {
        key: &'static str,
        value: String,
        child: Box<Node>,
    },
    Derive {
        from: &'static str,
        key: &'static str,
        derive: fn(Option<&str>) -> String,
        child: Box<Node>,
    },
    Read(Vec<&'static str>),
    Fragment(Vec<Node>),
}

impl Node {
    pub(crate) fn text(s: &str) -> Self {
        Self::Text(s.to_owned())
    }

    pub(crate) fn read(keys: &[&'static str]) -> Self {
        Self::Read(keys.to_vec())
    }
}

/// Renders `node` with an empty context.
pub(crate) fn render(node: &Node) -> String {
    let mut out = String::new();
    render_into(node, &mut Vec::new(), &mut out);
    out
}

fn lookup<'a>(scope: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
    scope
        .iter()
        .rev()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.as_str())
}

fn render_into(node: &Node, scope: &mut Vec<(&'static str, String)>, out: &mut String) {
    match node {
        Node::Text(s) => out.push_str(s),
        Node::Element {
            tag,
            attrs,
            children,
        } => {
            out.push('<');
            out.push_str(tag);
            for (k, v) in attrs {
                out.push_str(&format!(" {k}=\"{v}\""));
            }
            out.push('>');
            for child in children {
                render_into(child, scope, out);
            }
            out.push_str(&format!("</{tag}>"));
        }
        Node::Provide { key, value, child } => {
            scope.push((*key, value.clone()));
            render_into(child, scope, out);
            scope.pop();
        }
        Node::Derive {
            from,
            key,
            derive,
            child,
        } => {
            let value = derive(lookup(scope, from));
            scope.push((*key, value));
            render_into(child, scope, out);
            scope.pop();
        }
        Node::Read(keys) => {
            let seen: Vec<String> = keys
                .iter()
                .map(|k| format!("{k}={}", lookup(scope, k).unwrap_or("?")))
                .collect();
            out.push_str(&seen.join(" "));
        }
        Node::Fragment(children) => {
            for child in children {
                render_into(child, scope, out);
            }
        }
    }
}

/// Named component inputs, excluding children.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Props(Vec<(&'static str, String)>);

impl Props {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set(mut self, key: &'static str, value: &str) -> Self {
        self.0.push((key, value.to_owned()));
        self
    }

    pub(crate) fn get(&self, key: &str) -> Option<&str> {
        lookup(&self.0, key)
    }

    pub(crate) fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|(k, _)| *k)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub(crate) enum HostError {
    UnknownProp {
        component: &'static str,
        key: &'static str,
    },
}

impl fmt::Debug for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownProp { component, key } => {
                write!(f, "{component} does not accept prop `{key}`")
            }
        }
    }
}

impl std::error::Error for HostError {}

/// Makes `key` visible to descendants. Accepts a single prop named `key`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ContextProvider {
    pub(crate) name: &'static str,
    pub(crate) key: &'static str,
    pub(crate) default: &'static str,
}

impl Wrap<Node> for ContextProvider {
    type Config = Props;
    type Error = HostError;

    fn wrap(&self, config: Option<&Props>, child: Node) -> Result<Node, HostError> {
        let mut value = self.default;
        if let Some(props) = config {
            if let Some(key) = props.keys().find(|k| *k != self.key) {
                return Err(HostError::UnknownProp {
                    component: self.name,
                    key,
                });
            }
            value = props.get(self.key).unwrap_or(self.default);
        }
        Ok(Node::Provide {
            key: self.key,
            value: value.to_owned(),
            child: Box::new(child),
        })
    }
}

/// Provides `key` computed from the value of `from` visible at its position.
#[derive(Clone, Copy, Debug)]
pub(crate) struct DerivedProvider {
    pub(crate) from: &'static str,
    pub(crate) key: &'static str,
    pub(crate) derive: fn(Option<&str>) -> String,
}

impl Wrap<Node> for DerivedProvider {
    type Config = Props;
    type Error = HostError;

    fn wrap(&self, config: Option<&Props>, child: Node) -> Result<Node, HostError> {
        if let Some(key) = config.and_then(|props| props.keys().next()) {
            return Err(HostError::UnknownProp {
                component: "DerivedProvider",
                key,
            });
        }
        Ok(Node::Derive {
            from: self.from,
            key: self.key,
            derive: self.derive,
            child: Box::new(child),
        })
    }
}

/// An element that echoes every prop as an attribute.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Element(pub(crate) &'static str);

impl Wrap<Node> for Element {
    type Config = Props;
    type Error = HostError;

    fn wrap(&self, config: Option<&Props>, child: Node) -> Result<Node, HostError> {
        Ok(Node::Element {
            tag: self.0,
            attrs: config.map(|props| props.0.clone()).unwrap_or_default(),
            children: vec![child],
        })
    }
}

/// Counts how often the inner wrapper is invoked.
#[derive(Debug)]
pub(crate) struct Counting<W> {
    pub(crate) inner: W,
    pub(crate) calls: Rc<Cell<usize>>,
}

impl<W> Counting<W> {
    pub(crate) fn new(inner: W) -> (Self, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        (
            Self {
                inner,
                calls: Rc::clone(&calls),
            },
            calls,
        )
    }
}

impl<W: Wrap<Node>> Wrap<Node> for Counting<W> {
    type Config = W::Config;
    type Error = W::Error;

    fn wrap(&self, config: Option<&W::Config>, child: Node) -> Result<Node, W::Error> {
        self.calls.set(self.calls.get() + 1);
        self.inner.wrap(config, child)
    }
}

pub(crate) type HostEntry = DynEntry<'static, Node, Props, HostError>;

pub(crate) fn bare<W>(wrapper: W) -> HostEntry
where
    W: Wrap<Node, Config = Props, Error = HostError> + 'static,
{
    let boxed: Box<dyn Wrap<Node, Config = Props, Error = HostError>> = Box::new(wrapper);
    Entry::bare(boxed)
}

pub(crate) fn with<W>(wrapper: W, props: Props) -> HostEntry
where
    W: Wrap<Node, Config = Props, Error = HostError> + 'static,
{
    let boxed: Box<dyn Wrap<Node, Config = Props, Error = HostError>> = Box::new(wrapper);
    Entry::with_config(boxed, props)
}

pub(crate) const THEME: ContextProvider = ContextProvider {
    name: "ThemeProvider",
    key: "theme",
    default: "light",
};

pub(crate) const USER: ContextProvider = ContextProvider {
    name: "UserProvider",
    key: "user",
    default: "anonymous",
};

pub(crate) const LANGUAGE: ContextProvider = ContextProvider {
    name: "LanguageProvider",
    key: "language",
    default: "en",
};
