// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # Introduction
//!
//! `sfx` is a small CLI companion for the Memory Match Game. The game loads three
//! sound effects from `assets/sounds`, and this binary helps you put them there: it
//! creates the folder, prints a guide with recommended free sound sources and the
//! exact filenames the game expects, and can download a single file from a direct
//! URL.
//!
//! # Installation
//!
//! To install `sfx` on your system, run the following command, assuming you have
//! `cargo` on your system:
//!
//! ```bash
//! cargo install r3bl-sfx
//! ```
//!
//! If you don't have `cargo` on your system, follow these
//! [instructions](https://rustup.rs/) to install it first.
//!
//! # Run `sfx` binary target
//!
//! - Run `sfx` (or `sfx setup`) from the root folder of the game project. It creates
//!   `assets/sounds` if needed and prints the manual download guide.
//! - Run `sfx fetch <URL> <DESTINATION>` to download one sound file from a direct
//!   URL. A failed download is reported in the output and does not abort the
//!   process.
//! - Try `sfx --help` to see the available commands.
//! - If you want to generate log output for `sfx`, run `sfx -l`. This writes to a
//!   `log.txt` file in the current folder.

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
// - `#!` (Inner Attribute): The `!` indicates that this is an inner attribute. Inner
//   attributes apply to the entire item containing them. When you use
//   #![warn(clippy::<Lint>)] at the crate level (i.e., in your lib.rs or main.rs), it
//   will make Clippy emit a warning for any `Lint` violations found anywhere within that
//   entire crate. If placed inside a module, it would apply to that module and all its
//   sub-modules.
// - `#` (Outer Attribute): This is an outer attribute. Outer attributes apply to the item
//   immediately following them.
#![warn(clippy::all)]
#![warn(clippy::unwrap_in_result)]
#![warn(rust_2018_idioms)]
#![warn(clippy::doc_markdown)]
#![warn(clippy::redundant_closure)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::cast_sign_loss)]
#![warn(clippy::cast_lossless)]
#![warn(clippy::cast_possible_truncation)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(clippy::must_use_candidate)]
#![warn(clippy::items_after_statements)]
#![warn(clippy::needless_return)]
#![warn(clippy::unreadable_literal)]
#![warn(clippy::redundant_else)]
#![warn(clippy::iter_without_into_iter)]
#![warn(clippy::explicit_iter_loop)]
#![warn(clippy::ignored_unit_patterns)]
#![warn(clippy::match_wildcard_for_single_variants)]
#![warn(clippy::default_trait_access)]
#![warn(clippy::manual_instant_elapsed)]
#![warn(clippy::map_unwrap_or)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unused_self)]
#![warn(clippy::single_char_pattern)]
#![warn(clippy::manual_let_else)]
#![warn(clippy::unnecessary_semicolon)]
#![warn(clippy::if_not_else)]
#![warn(clippy::unnecessary_wraps)]
#![warn(clippy::single_match_else)]
#![warn(clippy::return_self_not_must_use)]
#![warn(clippy::needless_pass_by_value)]

pub const DEBUG_SOUND_ASSETS_MOD: bool = true;

// Attach sources.
pub mod common;
pub mod log_support;
pub mod setup;
pub mod sound_assets;

// Re-export.
pub use common::*;
pub use log_support::*;
pub use sound_assets::*;
