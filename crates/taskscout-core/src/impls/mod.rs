//! Implementations of the ports.
//!
//! - MarketplaceClient: the real HTTP marketplace
//! - InMemoryMarketplace: scripted batches for tests and local runs

pub mod http;
pub mod inmem;
pub mod marketplace;

pub use inmem::InMemoryMarketplace;
pub use marketplace::MarketplaceClient;
