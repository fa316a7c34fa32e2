// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Display;

use crossterm::style::{StyledContent, Stylize};

#[must_use]
pub fn colon() -> StyledContent<String> { dim(":") }

/// Normal or default text style.
pub fn normal(arg_text: impl Display) -> StyledContent<String> {
    format!("{arg_text}").grey()
}

/// Error text style.
pub fn error(arg_text: impl Display) -> StyledContent<String> {
    format!("{arg_text}").red()
}

/// Emphasis text style to highlight.
pub fn emphasis(arg_text: impl Display) -> StyledContent<String> {
    format!("{arg_text}").green()
}

/// De-emphasize (dim) text.
pub fn dim(arg_text: impl Display) -> StyledContent<String> {
    format!("{arg_text}").dark_grey()
}

/// Section heading text style for the printed guide.
pub fn heading(arg_text: impl Display) -> StyledContent<String> {
    format!("{arg_text}").cyan().bold()
}
