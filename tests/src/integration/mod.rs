//! Cross-crate flows through `mayak-runtime`.

mod concurrency;
mod flows;
