//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod catalogue;
mod ledger;
mod memory;

pub use catalogue::TomlCatalogueRepository;
pub use ledger::JsonlLedgerRepository;
pub use memory::InMemoryLedgerRepository;
