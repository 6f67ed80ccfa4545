//! Input/output surface logic for a pad-grid instrument.
//!
//! The only layout implemented here is the chord keyboard; see
//! [`chord_layout`] for the module overview.

#![no_std]

pub mod chord_layout;
