//! forecourt CLI - generate an editable vehicle summary PPTX
//!
//! The command reads vehicle details from a JSON file and/or CLI flags
//! and writes a single-slide PowerPoint summarizing the vehicle for
//! sale. Flag values take precedence over file values; missing fields
//! fall back to documented defaults.
//!
//! # Binary Usage
//!
//! ```bash
//! # From a JSON file
//! forecourt --input vehicle.json --output civic.pptx
//!
//! # Flags override file values
//! forecourt --input vehicle.json --price "£9,500" --gearbox manual
//! ```

pub mod app;

// Re-export main entry point and types
pub use app::{generate_command, load_listing, run_cli, Cli};
