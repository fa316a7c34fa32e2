// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod fmt;
pub mod macros;
pub mod mem_alloc;
pub mod temp_dir;
pub mod types;

// Re-export.
pub use fmt::*;
pub use temp_dir::*;
pub use types::*;
