//! Engine - page registration.
//!
//! The page is not discovered at runtime. Every collaborator is registered
//! once, by role, through [`PageBuilder`], and the coordinator only ever works
//! from that list:
//!
//! ```text
//! nav       ElementId(0)   top=0     height=80
//! section   "about"        top=800   height=600
//! group     ElementId(7)   children=[8, 9, 10]
//! parallax  [11, 12, 13]
//! ```

mod registry;

pub use registry::*;
