//! Command implementations

mod history;
mod init;
mod retract;
mod submit;
mod tally;
mod trend;

pub use history::history;
pub use init::init;
pub use retract::retract;
pub use submit::{SubmitArgs, submit};
pub use tally::tally;
pub use trend::trend;
