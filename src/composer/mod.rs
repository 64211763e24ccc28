//! Template composer for SDK example code
//!
//! Turns the builder form's values into a Python snippet that creates a
//! client and runs an agent task.
//!
//! # Example
//!
//! ```rust
//! use notte_snippet::composer::{compose, FormFields};
//!
//! let code = compose(&FormFields::new("sk-1", "Find jobs"));
//! assert!(code.contains(r#"api_key="sk-1""#));
//! assert!(code.contains(r#"task="Find jobs""#));
//! ```

mod fields;
mod models;
mod template;

pub use fields::{FieldsOverlay, FormFields, INITIAL_API_KEY, INITIAL_MODEL, INITIAL_TASK};
pub use models::{find_model, ModelOption, MODELS};
pub use template::{compose, run_arguments, RunArgument};
