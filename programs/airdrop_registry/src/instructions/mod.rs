pub mod add_supported_token;
pub mod create_project;
pub mod deposit;
pub mod initialize;
pub mod issue_tokens;
pub mod reclaim_tokens;
pub mod remove_supported_token;
pub mod update_merkle_root;
pub mod update_project;

pub use add_supported_token::*;
pub use create_project::*;
pub use deposit::*;
pub use initialize::*;
pub use issue_tokens::*;
pub use reclaim_tokens::*;
pub use remove_supported_token::*;
pub use update_merkle_root::*;
pub use update_project::*;
