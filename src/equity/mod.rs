pub mod error;
pub use error::*;

pub mod outs;
pub use outs::*;

pub mod percent;
pub use percent::*;

pub mod report;
pub use report::*;

pub mod simulation;
pub use simulation::*;

pub mod spot;
pub use spot::*;

pub mod tally;
pub use tally::*;
