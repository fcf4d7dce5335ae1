//! Settings page state: profile, appearance and notifications.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{DashboardError, Result};

/// Color theme catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    Default,
    Blue,
    Green,
    Rose,
    Violet,
    DefaultScaled,
    BlueScaled,
    MonoScaled,
}

impl Theme {
    pub const STANDARD: [Theme; 5] = [
        Theme::Default,
        Theme::Blue,
        Theme::Green,
        Theme::Rose,
        Theme::Violet,
    ];

    pub const SCALED: [Theme; 3] = [Theme::DefaultScaled, Theme::BlueScaled, Theme::MonoScaled];

    /// Every theme, standard first.
    pub fn all() -> impl Iterator<Item = Theme> {
        Theme::STANDARD.into_iter().chain(Theme::SCALED)
    }

    /// Stored value, e.g. "blue-scaled".
    pub fn value(&self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::Blue => "blue",
            Theme::Green => "green",
            Theme::Rose => "rose",
            Theme::Violet => "violet",
            Theme::DefaultScaled => "default-scaled",
            Theme::BlueScaled => "blue-scaled",
            Theme::MonoScaled => "mono-scaled",
        }
    }

    /// Name shown in the theme selector.
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Default => "Default",
            Theme::Blue => "Blue",
            Theme::Green => "Green",
            Theme::Rose => "Rose",
            Theme::Violet => "Violet",
            Theme::DefaultScaled => "Default",
            Theme::BlueScaled => "Blue",
            Theme::MonoScaled => "Mono",
        }
    }

    pub fn is_scaled(&self) -> bool {
        Theme::SCALED.contains(self)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for Theme {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim();
        Theme::all()
            .find(|theme| theme.value() == value)
            .ok_or_else(|| DashboardError::UnknownTheme(value.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ColorMode {
    /// Mode toggle order: light, dark, system, then light again.
    pub fn next(&self) -> ColorMode {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::System,
            ColorMode::System => ColorMode::Light,
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
            ColorMode::System => "system",
        }
    }
}

impl FromStr for ColorMode {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            "system" => Ok(ColorMode::System),
            other => Err(DashboardError::UnknownColorMode(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Email,
    Push,
    RentReminders,
    MaintenanceAlerts,
}

/// Notification switches on the settings page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPreferences {
    pub email: bool,
    pub push: bool,
    pub rent_reminders: bool,
    pub maintenance_alerts: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        NotificationPreferences {
            email: true,
            push: false,
            rent_reminders: true,
            maintenance_alerts: true,
        }
    }
}

impl NotificationPreferences {
    fn slot(&mut self, kind: NotificationKind) -> &mut bool {
        match kind {
            NotificationKind::Email => &mut self.email,
            NotificationKind::Push => &mut self.push,
            NotificationKind::RentReminders => &mut self.rent_reminders,
            NotificationKind::MaintenanceAlerts => &mut self.maintenance_alerts,
        }
    }

    pub fn is_enabled(&self, kind: NotificationKind) -> bool {
        match kind {
            NotificationKind::Email => self.email,
            NotificationKind::Push => self.push,
            NotificationKind::RentReminders => self.rent_reminders,
            NotificationKind::MaintenanceAlerts => self.maintenance_alerts,
        }
    }

    /// Flip one switch and return its new state.
    pub fn toggle(&mut self, kind: NotificationKind) -> bool {
        let slot = self.slot(kind);
        *slot = !*slot;
        debug!("Notification {:?} set to {}", kind, *slot);
        *slot
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        UserProfile {
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            phone: "+48 123 456 789".to_string(),
        }
    }
}

impl UserProfile {
    /// Name must be non-blank and email must contain '@'.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(DashboardError::InvalidProfile("name is required".to_string()));
        }
        if !self.email.contains('@') {
            return Err(DashboardError::InvalidProfile(format!(
                "{:?} is not an email address",
                self.email
            )));
        }
        Ok(())
    }
}

/// Settings page state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsState {
    pub profile: UserProfile,
    pub theme: Theme,
    pub color_mode: ColorMode,
    pub notifications: NotificationPreferences,
}

impl SettingsState {
    /// Replace the profile if it validates; the old profile stays otherwise.
    pub fn save_profile(&mut self, profile: UserProfile) -> Result<()> {
        profile.validate()?;
        debug!("Saving profile for {}", profile.name);
        self.profile = profile;
        Ok(())
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Advance the color mode toggle, returning the new mode.
    pub fn cycle_color_mode(&mut self) -> ColorMode {
        self.color_mode = self.color_mode.next();
        self.color_mode
    }
}
