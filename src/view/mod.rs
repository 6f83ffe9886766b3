//! Interactive page state that outlives a single event: the FAQ accordion
//! and the navigation dropdown. Each is a plain struct owned by its view.

mod accordion;
mod dropdown;

pub use accordion::Accordion;
pub use dropdown::{Dropdown, ListenerRegistry, OutsideClickGuard};
