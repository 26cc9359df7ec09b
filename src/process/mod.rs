/*!
 * Process Management
 * Process control blocks, the process registry, and the fork policy
 */

pub mod fork;
pub mod pcb;
pub mod table;
pub mod types;

pub use fork::{fork_due, spawn_child, FORK_INTERVAL};
pub use pcb::ProcessControlBlock;
pub use table::ProcessTable;
pub use types::ProcessClass;
