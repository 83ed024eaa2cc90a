//! Backend pipeline stages.
//!
//! The backend covers: Issue -> Commit, plus the exception recovery path that
//! replaces all four stages for one cycle after commit latches a fault.

pub mod commit;
pub mod issue;
pub mod recovery;

pub use commit::commit_stage;
pub use issue::issue_stage;
pub use recovery::exception_recovery;
