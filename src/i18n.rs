//! Internationalization (i18n) support for Vitrine
//!
//! Structure:
//! - mod.rs: Core types (Language, Key, Locale) and translation lookup
//! - ja.rs: Japanese translations
//! - en.rs: English translations

mod en;
mod ja;

use std::collections::HashMap;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Japanese,
    English,
}

impl Language {
    /// Get language display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Japanese => "日本語",
            Language::English => "English",
        }
    }

    /// Get language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::Japanese => "ja",
            Language::English => "en",
        }
    }
}

/// Translation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // App
    AppName,

    // Drawer navigation
    NavHome,
    NavServices,
    NavPickup,
    NavFaq,
    NavContact,

    // Hero slides
    SlideCleaningTitle,
    SlideCleaningSubtitle,
    SlideAirconTitle,
    SlideAirconSubtitle,
    SlideCampaignTitle,
    SlideCampaignSubtitle,

    // Section headers
    SectionServices,
    SectionPickup,
    SectionFaq,

    // Service cards
    ServiceHouseTitle,
    ServiceHouseBody,
    ServiceOfficeTitle,
    ServiceOfficeBody,
    ServiceAirconTitle,
    ServiceAirconBody,

    // Pickup features
    PickupStaffTitle,
    PickupStaffBody,
    PickupEcoTitle,
    PickupEcoBody,

    // Settings (drawer footer)
    SettingsDarkMode,
    SettingsLanguage,

    // FAQ accordion
    FaqDurationQ,
    FaqDurationA,
    FaqPrepQ,
    FaqPrepA,
    FaqPetsQ,
    FaqPetsA,
}

/// Get translation for a key in the specified language
pub fn t(lang: Language, key: Key) -> &'static str {
    let translations: &HashMap<Key, &'static str> = match lang {
        Language::Japanese => ja::translations(),
        Language::English => en::translations(),
    };

    translations.get(&key).copied().unwrap_or("???")
}

/// Localization context that can be passed around
#[derive(Debug, Clone, Copy, Default)]
pub struct Locale {
    pub language: Language,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Get translation for a key
    pub fn get(&self, key: Key) -> &'static str {
        t(self.language, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_has_both_translations() {
        let keys = [
            Key::AppName,
            Key::NavHome,
            Key::NavServices,
            Key::NavPickup,
            Key::NavFaq,
            Key::NavContact,
            Key::SlideCleaningTitle,
            Key::SlideCleaningSubtitle,
            Key::SlideAirconTitle,
            Key::SlideAirconSubtitle,
            Key::SlideCampaignTitle,
            Key::SlideCampaignSubtitle,
            Key::SectionServices,
            Key::SectionPickup,
            Key::SectionFaq,
            Key::ServiceHouseTitle,
            Key::ServiceHouseBody,
            Key::ServiceOfficeTitle,
            Key::ServiceOfficeBody,
            Key::ServiceAirconTitle,
            Key::ServiceAirconBody,
            Key::PickupStaffTitle,
            Key::PickupStaffBody,
            Key::PickupEcoTitle,
            Key::PickupEcoBody,
            Key::SettingsDarkMode,
            Key::SettingsLanguage,
            Key::FaqDurationQ,
            Key::FaqDurationA,
            Key::FaqPrepQ,
            Key::FaqPrepA,
            Key::FaqPetsQ,
            Key::FaqPetsA,
        ];
        for key in keys {
            for lang in [Language::Japanese, Language::English] {
                assert_ne!(
                    t(lang, key),
                    "???",
                    "missing {:?} translation for {:?}",
                    lang,
                    key
                );
            }
        }
    }
}
