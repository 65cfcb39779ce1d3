//! Widget management module
//!
//! Provides the widget registry (kinds, default sizes, titles), widget
//! records, z-order/focus management and hit testing.

mod id;
mod kind;
mod payload;
mod instance;
mod region;
mod manager;

pub use id::WidgetId;
pub(crate) use id::first_free_seq;
pub use kind::WidgetKind;
pub use payload::Payload;
pub use instance::WidgetInstance;
pub use region::WidgetRegion;
pub use manager::{CreateOutcome, WidgetManager};
