// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// `mimalloc` is a replacement for the default global allocator. It's optimized for
/// multi-threaded use cases where lots of small objects are created and destroyed.
/// The default allocator is the system allocator that's optimized for single threaded
/// use cases.
/// - <https://github.com/microsoft/mimalloc?tab=readme-ov-file#performance>
/// - <https://www.svix.com/blog/heap-fragmentation-in-rust-applications/>
/// - <https://news.ycombinator.com/item?id=35473271>
#[macro_export]
macro_rules! set_mimalloc_in_main {
    () => {{
        use mimalloc::MiMalloc;

        #[global_allocator]
        static GLOBAL: MiMalloc = MiMalloc;
    }};
}
