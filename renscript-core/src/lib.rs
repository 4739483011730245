pub mod generator;
pub mod ids;
pub mod model;
pub mod parser;
pub mod validator;

pub use generator::generate;
pub use ids::{IdGen, SequentialIds};
pub use model::{Character, Choice, Script, ScriptElement};
pub use parser::{Parser, parse};
pub use validator::{Issue, Severity, summarize, validate};
