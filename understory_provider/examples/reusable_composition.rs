// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capturing a provider list once and reusing it.
//!
//! A [`Composed`](understory_provider::Composed) can be rendered many times,
//! shared cheaply, and listed as a single entry of another composition.
//!
//! Run:
//! - `cargo run -p understory_provider --example reusable_composition`

use std::convert::Infallible;

use understory_provider::{DynEntry, Entry, Wrap, compose, compose_providers, wrap_fn};

type Html = String;

fn element(tag: &'static str) -> impl Wrap<Html, Config = (), Error = Infallible> {
    wrap_fn(move |_: Option<&()>, child: Html| {
        Ok::<_, Infallible>(format!("<{tag}>{child}</{tag}>"))
    })
}

fn boxed<W>(w: W) -> DynEntry<'static, Html, (), Infallible>
where
    W: Wrap<Html, Config = (), Error = Infallible> + 'static,
{
    let w: Box<dyn Wrap<Html, Config = (), Error = Infallible>> = Box::new(w);
    Entry::bare(w)
}

fn main() {
    let app_providers = compose_providers(vec![
        boxed(element("query-client")),
        boxed(element("router")),
        boxed(element("theme")),
    ]);

    // Same composition at two call sites.
    for page in ["home", "settings"] {
        let Ok(tree) = app_providers.render(format!("<{page}/>"));
        println!("{tree}");
    }

    // Reused as one entry of a larger list.
    let shell = [
        boxed(element("error-boundary")),
        boxed(app_providers.clone()),
        boxed(element("notifications")),
    ];
    let Ok(tree) = compose(&shell, Html::from("<app/>"));
    println!("{tree}");
}
