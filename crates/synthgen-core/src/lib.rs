//! Deterministic value generation core for synthgen.
//!
//! Every generator in this crate draws from an explicit, caller-owned
//! [`Engine`]. Seeding two engines identically and issuing the same calls in
//! the same order yields identical values on every platform.
//!
//! # Architecture
//!
//! ```text
//! Engine (ChaCha8 stream, seed get/set)
//!    │
//!    ├── numeric     integer / float on a decimal precision grid
//!    │      └── temporal   datetime over epoch milliseconds
//!    ├── sequence    string / hexadecimal / uuid / boolean
//!    ├── structured  json / array
//!    ├── bigint      arbitrary-precision integers
//!    └── select      pick / pick_weighted / pick_many / shuffle
//! ```
//!
//! # Example
//!
//! ```rust
//! use synthgen_core::{numeric, sequence, Engine, FloatRange, IntRange};
//!
//! let mut engine = Engine::new(42);
//! let roll = numeric::integer(&mut engine, IntRange::new(1, 6)).unwrap();
//! let price = numeric::float(&mut engine, FloatRange::new(0.0, 100.0).precision(0.01)).unwrap();
//! let id = sequence::uuid(&mut engine);
//!
//! let mut replay = Engine::new(42);
//! assert_eq!(numeric::integer(&mut replay, IntRange::new(1, 6)).unwrap(), roll);
//! # let _ = (price, id);
//! ```

pub mod bigint;
pub mod engine;
pub mod error;
pub mod numeric;
pub mod range;
pub mod select;
pub mod sequence;
pub mod structured;
pub mod temporal;

// Re-exports for convenience
pub use bigint::{big_int, BigIntSpec};
pub use engine::Engine;
pub use error::{DataError, RangeProblem};
pub use num_bigint::BigInt;
pub use range::{FloatBounds, FloatRange, IntRange};
pub use select::{pick, pick_many, pick_weighted, shuffle, Weighted};
pub use structured::Primitive;
pub use temporal::{datetime, DateTimeSpec};
