// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Type alias to make it easy to work with [`miette::Result`]. All the fallible
/// functions in this crate that cross a module boundary return this type, and leaf
/// errors (which implement [`miette::Diagnostic`]) are converted into a
/// [`miette::Report`] at the call site with `?`.
pub type CommonResult<T> = miette::Result<T>;
