//! Data layer: measurement loading and the figure model.
//!
//! ```text
//!  performance_<op>[_concurrent]
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  one float per line → Vec<f64>
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  Figure   │  sweep + three panels (insert, search, delete)
//!   └──────────┘
//! ```

pub mod loader;
pub mod model;
