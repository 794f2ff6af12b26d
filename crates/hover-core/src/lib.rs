// File: crates/hover-core/src/lib.rs
// Summary: Core library entry point; exports the series model, hover resolution, tooltips and events.

pub mod error;
pub mod events;
pub mod hover;
pub mod locate;
pub mod series;
pub mod settings;
pub mod stack;
pub mod tooltip;
pub mod types;
pub mod view;

pub use error::{Error, Result, ValidationIssue};
pub use events::{ChartEvent, EventBus, EventKind, Interaction, SubscriptionId, TimeWindowRequest};
pub use hover::{resolve, HoverInfo, HoverOptions, SeriesHover};
pub use locate::{find_index_in_data, find_index_in_geometry};
pub use series::{Geometry, Series};
pub use settings::TooltipSettings;
pub use tooltip::{TextFormatter, Tooltip, TooltipFormatter, TooltipRow};
pub use types::{Insets, Position};
pub use view::ViewState;
