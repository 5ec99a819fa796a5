//! # bidec-rs: Bi-decomposition of Boolean functions in Rust
//!
//! **`bidec-rs`** synthesizes small networks of two-input gates (AND, OR, XOR) for
//! **incompletely specified functions** given as truth tables. It is designed to be used as a
//! resynthesis step inside logic optimization tools.
//!
//! ## What is bi-decomposition?
//!
//! A function `f` is bi-decomposable under a gate `op` when it can be written as
//! `f = op(A, B)` where `A` and `B` depend on strictly fewer variables than `f`.
//! Applying such splits recursively, and exploiting the freedom of don't-care points at every
//! step, yields compact multi-level networks.
//!
//! ## Key Features
//!
//! - **Manager-Centric Architecture**: All networks live in the arena of a
//!   [`Manager`][crate::manager::Manager], referenced through lightweight
//!   [`Ref`][crate::reference::Ref] handles carrying a complement bit.
//! - **Structural Reuse**: A support-indexed, complement-aware [`Table`][crate::table::Table]
//!   guarantees that no two stored nodes compute the same function or its complement.
//! - **Budgeted**: Each call creates at most a given number of nodes and fails cleanly otherwise.
//! - **Divisors**: Caller-supplied functions are reused as free leaves.
//!
//! ## Basic Usage
//!
//! ```rust
//! use bidec_rs::manager::Manager;
//! use bidec_rs::params::Params;
//!
//! let mut mgr = Manager::new(Params::default().with_max_support(4));
//!
//! // f = x0 XOR x1 over two variables, x1 = 1 is a don't-care
//! let func = [0b0110];
//! let care = [0b0011];
//! let root = mgr.decompose(&func, &care, 2, &[] as &[Vec<u64>], 10).unwrap();
//!
//! // With x1 = 0 only, f behaves like x0
//! assert_eq!(mgr.node_num(), 0);
//! assert_eq!(root, mgr.var_ref(0));
//! ```
//!
//! ## Core Components
//!
//! - **[`manager`]**: The [`Manager`][crate::manager::Manager] arena and its accessors.
//! - **[`decompose`]**: The recursive decomposition driver.
//! - **[`split`]**: Feasibility checks and component derivation for strong splits.
//! - **[`truth`]** and **[`isf`]**: Truth tables and incompletely specified functions.
//! - **[`dot`]**: Utilities for visualizing networks using Graphviz.

pub mod bitset;
pub mod decompose;
pub mod dot;
pub mod error;
pub mod gate;
pub mod isf;
pub mod manager;
pub mod node;
pub mod params;
pub mod reference;
pub mod split;
pub mod table;
pub mod truth;
pub mod utils;
