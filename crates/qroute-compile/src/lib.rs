//! qroute Placement and Routing
//!
//! This crate maps a circuit over logical qubits onto a square grid of
//! physical qubits with nearest-neighbor coupling, inserting SWAPs so that
//! every two-qubit gate acts on adjacent cells.
//!
//! # Overview
//!
//! 1. **Discovery**: collect the qubits in order of first appearance
//! 2. **Layout**: place them on the smallest square grid that fits, using a
//!    [`PlacementStrategy`]
//! 3. **Routing**: walk the instructions in order; before each two-qubit
//!    gate, the [`GreedyRouter`] swaps the control toward the target until
//!    the two are adjacent
//!
//! ```text
//! logical circuit ──► PlacementStrategy ──► PlacementMap
//!                                               │
//!           instructions ──► GreedyRouter ◄─────┘
//!                                │
//!                                ▼
//!                     Circuit<Coordinate> + TransformReport
//! ```
//!
//! # Example
//!
//! ```rust
//! use qroute_compile::{CircuitTransformer, PlacementStrategy};
//!
//! let circuit = qroute_qasmf::parse("H a\nX b\nX c\nCNOT a,d\n").unwrap();
//! let result = CircuitTransformer::new(PlacementStrategy::RowMajor)
//!     .transform(&circuit)
//!     .unwrap();
//!
//! assert_eq!(result.report.swap_count, 1);
//! assert_eq!(
//!     result.circuit.to_string(),
//!     "H qubit_0_0\nX qubit_1_0\nX qubit_0_1\n\
//!      SWAP qubit_0_0,qubit_1_0\nCNOT qubit_1_0,qubit_1_1\n"
//! );
//! ```
//!
//! # Strategies
//!
//! | Strategy | Layout |
//! |----------|--------|
//! | `row-major` | Rows left to right, top to bottom (default) |
//! | `boustrophedon` | Like row-major, odd rows right to left |
//! | `graph-based` | Not implemented; always fails |

pub mod error;
pub mod geometry;
pub mod layout;
pub mod placement;
pub mod routing;
pub mod transformer;

pub use error::{CompileError, CompileResult, PlacementError};
pub use geometry::{Coordinate, Grid};
pub use layout::{PlacementStrategy, UnknownStrategy};
pub use placement::{PlacementMap, QubitPlacement};
pub use routing::GreedyRouter;
pub use transformer::{CircuitTransformer, TransformReport, Transformed, transform};
