//! Placeholder icon generator.
//!
//! Produces square PNG icons with a vertical two-color gradient and a
//! simple outlined book glyph, one file per requested size.

pub mod config;
pub mod draw;
pub mod error;
pub mod icon_gen;
pub mod logging;
pub mod verify;

pub use config::IconConfig;
pub use error::DrawError;
pub use icon_gen::{
    generate, generate_with, DefaultPainter, GenerationReport, IconOutcome, IconPainter,
    IconStatus,
};
