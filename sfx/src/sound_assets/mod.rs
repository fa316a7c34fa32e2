// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod catalog;
pub mod download;
pub mod sounds_dir;

// Re-export.
pub use catalog::*;
pub use download::*;
pub use sounds_dir::*;
