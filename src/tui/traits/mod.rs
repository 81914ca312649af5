//! Capabilities the TUI panels declare about themselves
//!
//! `App` owns the browser and routes keys; each panel says what it can do
//! and `App` calls through these traits instead of matching on panel types.
//!
//! | Panel        | Component | Scrollable | Selectable | Copyable | Interactive |
//! |--------------|-----------|------------|------------|----------|-------------|
//! | card grid    | ✓         | ✓ (rows)   | ✓ (cursor) |          | ✓           |
//! | detail panel | ✓         | ✓ (lines)  |            | ✓        | ✓           |
//! | logs panel   | ✓         | ✓ (lines)  | ✓ (entry)  | ✓        | ✓           |

mod component;
mod copyable;
mod interactive;
mod scrollable;

pub use component::{spinner_char, Component, ComponentId, RenderContext};
pub use copyable::{CopyResult, Copyable};
pub use interactive::{Handled, Interactive, ScrollableInteractive};
pub use scrollable::{Scrollable, Selectable};
