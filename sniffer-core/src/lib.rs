//! # sniffer-core
//!
//! The decode-and-render pipeline: a captured buffer and the session's
//! [`PlatformProfile`] go in, a [`DecodedFrame`] comes out of the classifier,
//! and the renderer turns it into a fixed-layout text report.
//!
//! ### Key Submodules:
//! - `frame`: the captured bytes plus captured/original lengths
//! - `profile`: link-layer presence for a capture session
//! - `classify`: layer selection and offset arithmetic
//! - `render`: addresses, ports, hex and ASCII dumps

pub mod classify;
pub mod frame;
pub mod profile;
pub mod render;

pub use classify::{classify, DecodedFrame};
pub use frame::RawFrame;
pub use profile::PlatformProfile;
pub use render::{render, render_to_string};
pub use sniffer_protocols::DecodeError;
