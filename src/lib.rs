pub use crate::capture::{
    capture, Captured, CompareOp, Comparison, Equal, GreaterThan, GreaterThanEqual, LessThan,
    LessThanEqual, NotEqual,
};
pub use crate::context::{CaseContext, Context, FailureHandler};
pub use crate::eval::{evaluate, throws, throws_as};
pub use crate::outcome::{IntoOutcome, Outcome};
pub use crate::registry::{CaseRegistry, Fixture, RegisteredCase};
pub use crate::runner::{run_to_string, Failure, RunConfig, RunError, RunSummary, Runner};

pub mod capture;
pub mod context;
pub mod eval;
pub mod macros;
pub mod outcome;
pub mod registry;
pub mod runner;
