//! # Mayak Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Criterion benchmarks for the pure cores
//! └── src/integration/  # Cross-crate flows through the runtime
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p mk-tests
//! cargo bench -p mk-tests
//! ```

pub mod integration;
