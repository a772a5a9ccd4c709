pub mod config;
pub mod error;
pub mod navigation;
pub mod page;
pub mod role;
pub mod route;
pub mod session;
pub mod storage;

// Re-export common types
pub use error::{DonorError, Result};
pub use navigation::{NavAction, visible_actions};
pub use page::{PageHandler, PageView};
pub use role::{Role, StoredRole};
pub use route::{Route, dashboard_path, dashboard_route};
pub use session::{Session, SessionContext};
pub use storage::DurableStorage;
