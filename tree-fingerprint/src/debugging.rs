// -*- coding: utf-8 -*-
// ------------------------------------------------------------------------------------------------
// Copyright © 2026, tree-fingerprint authors.
// Licensed under either of Apache License, Version 2.0, or MIT license, at your option.
// Please see the LICENSE-APACHE or LICENSE-MIT files in this distribution for license details.
// ------------------------------------------------------------------------------------------------

// Traces the decomposition work queue on stderr.  Compiled away unless the `copious-debugging`
// feature is enabled.

#[cfg(feature = "copious-debugging")]
macro_rules! copious_debugging {
    ($($arg:tt)*) => {{
        ::std::eprintln!("[tree-fingerprint] {}", ::std::format_args!($($arg)*));
    }};
}

#[cfg(not(feature = "copious-debugging"))]
macro_rules! copious_debugging {
    ($($arg:tt)*) => {};
}
