//! matching_core - single-symbol price-time priority limit order book
//!
//! A library-style component with a four-function contract: [`Engine::init`],
//! [`Engine::limit`], [`Engine::cancel`], [`Engine::destroy`]. Fills are
//! reported inline through a host-supplied callback invoked from `limit` —
//! there is no transport, persistence, or multi-symbol routing here; those
//! are external collaborators layered on top by the host.
//!
//! # Modules
//!
//! - [`core_types`] - identifier, price, quantity, and side primitives
//! - [`config`] - engine sizing bounds, validated once at construction
//! - [`order`] - the `OrderRequest` / `ExecutionReport` wire shapes
//! - [`pool`] - fixed-capacity node pool backing every price-level queue
//! - [`price_level`] - FIFO queue of resting orders at one price
//! - [`book_side`] - one side's price-indexed array of levels + best cursor
//! - [`order_index`] - identifier -> locator table for O(1) cancel
//! - [`engine`] - the matching core and lifecycle
//! - [`logging`] - `tracing` subscriber wiring for the demo binary

mod book_side;
pub mod config;
pub mod core_types;
pub mod engine;
pub mod logging;
pub mod order;
mod order_index;
mod pool;
mod price_level;

pub use config::{BookConfigError, EngineConfig};
pub use core_types::{OrderId, Price, Quantity, Side};
pub use engine::Engine;
pub use order::{ExecutionReport, FixedString, OrderRequest};
