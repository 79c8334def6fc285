//! Host neighbor (ARP / NDP) table discovery.
//!
//! One acquisition source is chosen at startup by [`NeighborSourceSelector`]
//! and kept for the lifetime of the process. [`NeighborRefresher`] pulls text
//! from it, runs the bound dialect parser and swaps the published snapshot.

pub mod command;
pub mod fs;
pub mod parsers;
pub mod refresher;
pub mod selector;
pub mod source;
pub mod store;

pub use command::{command_fn, system_command, RunCommand};
pub use fs::{NeighborFs, RootFs};
pub use parsers::{Dialect, ParseFn};
pub use refresher::NeighborRefresher;
pub use selector::{bind_neighbor_table, host_candidates, NeighborSourceSelector};
pub use source::{CmdSource, FsysSource, NeighborSource};
pub use store::NeighborStore;
