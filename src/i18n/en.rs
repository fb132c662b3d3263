//! English translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "Vitrine");

    // Drawer navigation
    m.insert(Key::NavHome, "Home");
    m.insert(Key::NavServices, "Services");
    m.insert(Key::NavPickup, "Pickup");
    m.insert(Key::NavFaq, "FAQ");
    m.insert(Key::NavContact, "Contact");

    // Hero slides
    m.insert(Key::SlideCleaningTitle, "Refresh your whole home");
    m.insert(Key::SlideCleaningSubtitle, "Professional house cleaning");
    m.insert(Key::SlideAirconTitle, "Air conditioner deep clean");
    m.insert(Key::SlideAirconSubtitle, "Mold and dust removed at the source");
    m.insert(Key::SlideCampaignTitle, "Seasonal campaign");
    m.insert(Key::SlideCampaignSubtitle, "20% off for a limited time");

    // Section headers
    m.insert(Key::SectionServices, "Services");
    m.insert(Key::SectionPickup, "Pickup");
    m.insert(Key::SectionFaq, "FAQ");

    // Service cards
    m.insert(Key::ServiceHouseTitle, "House cleaning");
    m.insert(
        Key::ServiceHouseBody,
        "Kitchen, bath, and living room finished to a professional standard.",
    );
    m.insert(Key::ServiceOfficeTitle, "Office cleaning");
    m.insert(
        Key::ServiceOfficeBody,
        "From scheduled rounds to one-off visits, we keep your workplace spotless.",
    );
    m.insert(Key::ServiceAirconTitle, "Aircon cleaning");
    m.insert(
        Key::ServiceAirconBody,
        "Full disassembly wash that clears hidden mold, dust, and odors.",
    );

    // Pickup features
    m.insert(Key::PickupStaffTitle, "Experienced staff");
    m.insert(
        Key::PickupStaffBody,
        "Trained in-house staff walk you through the work before it starts.",
    );
    m.insert(Key::PickupEcoTitle, "Eco-friendly detergents");
    m.insert(
        Key::PickupEcoBody,
        "Safe around small children and pets, gentle on the environment.",
    );

    // Settings (drawer footer)
    m.insert(Key::SettingsDarkMode, "Dark mode");
    m.insert(Key::SettingsLanguage, "Language");

    // FAQ accordion
    m.insert(Key::FaqDurationQ, "How long does the work take?");
    m.insert(
        Key::FaqDurationA,
        "Roughly 90 minutes per air conditioner, depending on its condition.",
    );
    m.insert(Key::FaqPrepQ, "Do I need to prepare anything?");
    m.insert(
        Key::FaqPrepA,
        "Just move valuables and fragile items away from the work area.",
    );
    m.insert(Key::FaqPetsQ, "Can you work with pets at home?");
    m.insert(
        Key::FaqPetsA,
        "Yes. We only ask that pets wait in another room during the visit.",
    );

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
