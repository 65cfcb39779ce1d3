//! Content models for Classboard widgets
//!
//! Each model reads itself from a widget [`Payload`] and answers every
//! user action with a partial payload patch, ready for
//! `BoardEngine::update_payload`. Models never touch geometry.
//!
//! Periodic work (countdowns, stopwatches, the name-picker animation) is
//! driven by a [`Ticker`] that the host advances from its frame or timer
//! callback. Registering the ticker's handle as the widget's content hooks
//! cancels it when the widget is closed.
//!
//! [`Payload`]: classboard_desktop::Payload

pub mod content;
pub mod ticker;

pub mod countdown;
pub mod stopwatch;
pub mod scoreboard;
pub mod dice;
pub mod picker;
pub mod groups;
pub mod traffic;
pub mod embed;
pub mod text;
pub mod draw;
pub mod calendar;
pub mod clock;

pub use content::{ContentModel, WidgetContent};
pub use ticker::{Ticker, TickerHandle};

pub use countdown::Countdown;
pub use stopwatch::Stopwatch;
pub use scoreboard::{Scoreboard, TeamScore};
pub use dice::DiceTray;
pub use picker::{NamePicker, PickRound};
pub use groups::GroupMaker;
pub use traffic::{Light, TrafficLight};
pub use embed::EmbedLink;
pub use text::Announcement;
pub use draw::{DrawSettings, DrawTool};
pub use calendar::{CalendarView, CalendarViewMode};
pub use clock::LiveClock;
