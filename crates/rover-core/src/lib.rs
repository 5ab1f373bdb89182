//! Core types for the rover simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! closed vocabulary the rest of the workspace speaks: compass headings,
//! drive commands, and the errors raised while decoding them.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod error;
pub mod heading;

pub use command::{parse_commands, Command, CommandSequence};
pub use error::{CommandError, HeadingError};
pub use heading::Heading;
