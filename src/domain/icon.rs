use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of icon identifiers the site knows how to draw.
///
/// The backend sends icon names as free-form strings (lucide names such as
/// `"Database"` or `"DollarSign"`). Names are resolved through [`ICON_TABLE`];
/// anything unrecognised becomes [`Icon::FALLBACK`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Icon {
    Bluetooth,
    Building,
    Calculator,
    Calendar,
    ChevronRight,
    Clock,
    Code,
    Database,
    DollarSign,
    Droplets,
    Eye,
    Fan,
    Globe,
    Home,
    Mail,
    MapPin,
    Monitor,
    Phone,
    QrCode,
    Shield,
    Smartphone,
    Target,
    Terminal,
    Thermometer,
    Users,
    Wifi,
}

/// name → (variant, glyph)
pub const ICON_TABLE: &[(&str, Icon, &str)] = &[
    ("Bluetooth", Icon::Bluetooth, "\u{16DD}"),
    ("Building", Icon::Building, "\u{1F3E2}"),
    ("Calculator", Icon::Calculator, "\u{1F5A9}"),
    ("Calendar", Icon::Calendar, "\u{1F4C5}"),
    ("ChevronRight", Icon::ChevronRight, "\u{203A}"),
    ("Clock", Icon::Clock, "\u{1F552}"),
    ("Code", Icon::Code, "\u{2328}"),
    ("Database", Icon::Database, "\u{1F5C4}"),
    ("DollarSign", Icon::DollarSign, "$"),
    ("Droplets", Icon::Droplets, "\u{1F4A7}"),
    ("Eye", Icon::Eye, "\u{1F441}"),
    ("Fan", Icon::Fan, "\u{2744}"),
    ("Globe", Icon::Globe, "\u{1F310}"),
    ("Home", Icon::Home, "\u{1F3E0}"),
    ("Mail", Icon::Mail, "\u{2709}"),
    ("MapPin", Icon::MapPin, "\u{1F4CD}"),
    ("Monitor", Icon::Monitor, "\u{1F5A5}"),
    ("Phone", Icon::Phone, "\u{260E}"),
    ("QrCode", Icon::QrCode, "\u{25A6}"),
    ("Shield", Icon::Shield, "\u{1F6E1}"),
    ("Smartphone", Icon::Smartphone, "\u{1F4F1}"),
    ("Target", Icon::Target, "\u{1F3AF}"),
    ("Terminal", Icon::Terminal, "\u{2318}"),
    ("Thermometer", Icon::Thermometer, "\u{1F321}"),
    ("Users", Icon::Users, "\u{1F465}"),
    ("Wifi", Icon::Wifi, "\u{1F4F6}"),
];

impl Icon {
    pub const FALLBACK: Icon = Icon::Calculator;

    /// Exact lookup, tolerant of case and `-`/`_` separators
    /// (`"dollar-sign"` and `"DollarSign"` are the same icon).
    pub fn from_name(name: &str) -> Option<Icon> {
        let wanted = normalize(name);
        ICON_TABLE
            .iter()
            .find(|(known, _, _)| normalize(known) == wanted)
            .map(|(_, icon, _)| *icon)
    }

    pub fn resolve(name: &str) -> Icon {
        Self::from_name(name).unwrap_or(Self::FALLBACK)
    }

    fn entry(self) -> &'static (&'static str, Icon, &'static str) {
        // 每個變體都在表中，找不到時退回第一筆避免 panic
        ICON_TABLE
            .iter()
            .find(|(_, icon, _)| *icon == self)
            .unwrap_or(&ICON_TABLE[0])
    }

    pub fn name(self) -> &'static str {
        self.entry().0
    }

    pub fn glyph(self) -> &'static str {
        self.entry().2
    }

    /// kebab-case name used in CSS classes, e.g. `icon-dollar-sign`
    pub fn css_class(self) -> String {
        let mut class = String::from("icon icon-");
        for (i, ch) in self.name().chars().enumerate() {
            if ch.is_ascii_uppercase() {
                if i > 0 {
                    class.push('-');
                }
                class.push(ch.to_ascii_lowercase());
            } else {
                class.push(ch);
            }
        }
        class
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '-' && *c != '_' && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

impl Default for Icon {
    fn default() -> Self {
        Self::FALLBACK
    }
}

impl From<String> for Icon {
    fn from(name: String) -> Self {
        let icon = Icon::from_name(&name);
        if icon.is_none() {
            tracing::debug!("Unknown icon name '{}', using {}", name, Icon::FALLBACK);
        }
        icon.unwrap_or(Icon::FALLBACK)
    }
}

impl From<&str> for Icon {
    fn from(name: &str) -> Self {
        Icon::resolve(name)
    }
}

impl From<Icon> for String {
    fn from(icon: Icon) -> Self {
        icon.name().to_string()
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
