//! Launch configuration resolution for the sjl launcher
//!
//! Turns a working directory and a few environment inputs into a fully
//! validated [`LaunchPlan`]:
//!
//! 1. determine the working directory
//! 2. discover the config file (explicit override or fixed candidate list)
//! 3. parse it
//! 4. validate the lib folder
//! 5. validate or create the temp folder
//! 6. locate the launcher artifact inside the lib folder
//! 7. validate the runtime home
//! 8. assemble the shell commands
//!
//! Each step fails fast; a plan is only returned when every step succeeded.
//! The temp folder is the only thing this crate ever creates.

pub mod artifact;
pub mod command;
pub mod discovery;
pub mod error;
pub mod inputs;
pub mod plan;
pub mod platform;
pub mod resolver;

pub use command::{CommandAssembler, ENTRY_POINT, LaunchTargets};
pub use discovery::{discover_config_file, first_existing_candidate};
pub use error::{Error, ErrorKind, Result};
pub use inputs::LaunchInputs;
pub use plan::LaunchPlan;
pub use platform::PlatformProfile;
pub use resolver::LaunchResolver;
