//! Animated parametric curve gallery: curve catalog, parameter modulation,
//! per-frame auto-fit rendering and pointer-driven effects.
//!
//! Nothing here touches platform APIs; a front-end supplies a [`Surface`]
//! per cell and forwards input events to a [`Gallery`].

pub mod catalog;
pub mod cell;
pub mod clock;
pub mod constants;
pub mod effects;
pub mod error;
pub mod gallery;
pub mod interaction;
pub mod modulator;
pub mod render;

pub use catalog::*;
pub use cell::*;
pub use clock::*;
pub use effects::*;
pub use error::*;
pub use gallery::*;
pub use interaction::*;
pub use modulator::{derive_modulator, evaluate, Modulator, ModulatorSet};
pub use render::*;
