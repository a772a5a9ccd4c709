pub mod session_store;
pub mod shell;

pub use session_store::SessionStore;
pub use shell::{RouteTable, RouteTableBuilder, ShellController};
