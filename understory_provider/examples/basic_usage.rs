// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flattening a stack of providers, with and without configuration.
//!
//! Run:
//! - `cargo run -p understory_provider --example basic_usage`

use std::convert::Infallible;

use understory_provider::{Entry, ProviderComposer, Wrap};

/// A provider that renders as a `<div>` carrying one data attribute.
struct Provider {
    attr: &'static str,
    default: &'static str,
}

impl Wrap<String> for Provider {
    type Config = &'static str;
    type Error = Infallible;

    fn wrap(&self, config: Option<&&'static str>, child: String) -> Result<String, Infallible> {
        let value = config.copied().unwrap_or(self.default);
        Ok(format!("<div data-{}=\"{value}\">{child}</div>", self.attr))
    }
}

const THEME: Provider = Provider {
    attr: "theme",
    default: "light",
};
const AUTH: Provider = Provider {
    attr: "auth",
    default: "anonymous",
};
const ROUTER: Provider = Provider {
    attr: "router",
    default: "enabled",
};

fn main() {
    // Instead of nesting THEME(AUTH(ROUTER(app))) by hand:
    let providers = [
        Entry::with_config(THEME, "dark"),
        Entry::with_config(AUTH, "authenticated"),
        Entry::bare(ROUTER),
    ];

    let Ok(tree) = ProviderComposer {
        providers: &providers,
        children: String::from("<div>Hello World!</div>"),
    }
    .render();

    println!("{tree}");
}
