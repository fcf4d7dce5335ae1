//! View state for the property management dashboard.
//!
//! Each page owns its own state struct. Chart views produce a [`ChartPayload`]
//! that serializes to the JSON the chart renderer consumes.

pub mod error;
pub mod format;
pub mod payload;
pub mod properties_page;
pub mod settings;
pub mod state;

pub use error::{DashboardError, Result};
pub use format::{format_pln, trend_sentence};
pub use payload::{BarDatum, ChartFooter, ChartPayload};
pub use properties_page::{EditorMode, PropertiesPage, PropertyEditor};
pub use settings::{ColorMode, NotificationKind, NotificationPreferences, SettingsState, Theme, UserProfile};
pub use state::{BookingStatsView, CombinedStatsView, RevenueStatsView};
