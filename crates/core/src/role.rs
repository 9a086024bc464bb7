//! Semantic color roles shared by every theme.

use serde::{Deserialize, Serialize};

/// A semantic slot in a color scheme, e.g. `primary` or `card-foreground`.
///
/// Declaration order is the order CSS variables are emitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorRole {
    Background,
    Foreground,
    Card,
    CardForeground,
    Popover,
    PopoverForeground,
    Primary,
    PrimaryForeground,
    Secondary,
    SecondaryForeground,
    Muted,
    MutedForeground,
    Accent,
    AccentForeground,
    Destructive,
    DestructiveForeground,
    Border,
    Input,
    Ring,
}

impl ColorRole {
    pub const ALL: [ColorRole; 19] = [
        ColorRole::Background,
        ColorRole::Foreground,
        ColorRole::Card,
        ColorRole::CardForeground,
        ColorRole::Popover,
        ColorRole::PopoverForeground,
        ColorRole::Primary,
        ColorRole::PrimaryForeground,
        ColorRole::Secondary,
        ColorRole::SecondaryForeground,
        ColorRole::Muted,
        ColorRole::MutedForeground,
        ColorRole::Accent,
        ColorRole::AccentForeground,
        ColorRole::Destructive,
        ColorRole::DestructiveForeground,
        ColorRole::Border,
        ColorRole::Input,
        ColorRole::Ring,
    ];

    /// The camelCase key used in theme configuration.
    pub fn config_key(self) -> &'static str {
        match self {
            ColorRole::Background => "background",
            ColorRole::Foreground => "foreground",
            ColorRole::Card => "card",
            ColorRole::CardForeground => "cardForeground",
            ColorRole::Popover => "popover",
            ColorRole::PopoverForeground => "popoverForeground",
            ColorRole::Primary => "primary",
            ColorRole::PrimaryForeground => "primaryForeground",
            ColorRole::Secondary => "secondary",
            ColorRole::SecondaryForeground => "secondaryForeground",
            ColorRole::Muted => "muted",
            ColorRole::MutedForeground => "mutedForeground",
            ColorRole::Accent => "accent",
            ColorRole::AccentForeground => "accentForeground",
            ColorRole::Destructive => "destructive",
            ColorRole::DestructiveForeground => "destructiveForeground",
            ColorRole::Border => "border",
            ColorRole::Input => "input",
            ColorRole::Ring => "ring",
        }
    }

    /// The CSS custom property name without the leading `--`.
    pub fn css_name(self) -> &'static str {
        match self {
            ColorRole::Background => "background",
            ColorRole::Foreground => "foreground",
            ColorRole::Card => "card",
            ColorRole::CardForeground => "card-foreground",
            ColorRole::Popover => "popover",
            ColorRole::PopoverForeground => "popover-foreground",
            ColorRole::Primary => "primary",
            ColorRole::PrimaryForeground => "primary-foreground",
            ColorRole::Secondary => "secondary",
            ColorRole::SecondaryForeground => "secondary-foreground",
            ColorRole::Muted => "muted",
            ColorRole::MutedForeground => "muted-foreground",
            ColorRole::Accent => "accent",
            ColorRole::AccentForeground => "accent-foreground",
            ColorRole::Destructive => "destructive",
            ColorRole::DestructiveForeground => "destructive-foreground",
            ColorRole::Border => "border",
            ColorRole::Input => "input",
            ColorRole::Ring => "ring",
        }
    }

    /// Looks up a role by its configuration key.
    pub fn from_config_key(key: &str) -> Option<ColorRole> {
        ColorRole::ALL.into_iter().find(|r| r.config_key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_declaration_order() {
        assert!(ColorRole::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn config_keys_round_trip() {
        for role in ColorRole::ALL {
            assert_eq!(ColorRole::from_config_key(role.config_key()), Some(role));
        }
        assert_eq!(ColorRole::from_config_key("chart1"), None);
    }

    #[test]
    fn css_names_are_kebab_case_of_keys() {
        for role in ColorRole::ALL {
            let kebab: String = role
                .config_key()
                .chars()
                .flat_map(|c| {
                    if c.is_ascii_uppercase() {
                        vec!['-', c.to_ascii_lowercase()]
                    } else {
                        vec![c]
                    }
                })
                .collect();
            assert_eq!(role.css_name(), kebab);
        }
    }

    #[test]
    fn serde_uses_config_keys() {
        for role in ColorRole::ALL {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.config_key()));
        }
    }
}
