//! Fixed page content
//!
//! Everything the landing page shows is declared here: hero slides, drawer
//! links, service cards, pickup features, and FAQ entries. The slide set is
//! fixed at startup and never reordered.

use iced::{Color, color};

use crate::i18n::Key;

/// One hero slide: localized copy over a tinted panel
#[derive(Debug, Clone, Copy)]
pub struct Slide {
    pub title: Key,
    pub subtitle: Key,
    pub tint: Color,
}

/// One drawer navigation link
#[derive(Debug, Clone, Copy)]
pub struct NavLink {
    pub label: Key,
}

/// One reveal card in the services row
#[derive(Debug, Clone, Copy)]
pub struct ServiceCard {
    pub title: Key,
    pub body: Key,
}

/// One pickup feature split card
#[derive(Debug, Clone, Copy)]
pub struct PickupFeature {
    pub title: Key,
    pub body: Key,
    pub tint: Color,
}

/// One FAQ accordion entry
#[derive(Debug, Clone, Copy)]
pub struct FaqEntry {
    pub question: Key,
    pub answer: Key,
}

pub const SLIDES: &[Slide] = &[
    Slide {
        title: Key::SlideCleaningTitle,
        subtitle: Key::SlideCleaningSubtitle,
        tint: color!(0x2a6f97),
    },
    Slide {
        title: Key::SlideAirconTitle,
        subtitle: Key::SlideAirconSubtitle,
        tint: color!(0x386641),
    },
    Slide {
        title: Key::SlideCampaignTitle,
        subtitle: Key::SlideCampaignSubtitle,
        tint: color!(0x9d4edd),
    },
];

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: Key::NavHome },
    NavLink {
        label: Key::NavServices,
    },
    NavLink {
        label: Key::NavPickup,
    },
    NavLink { label: Key::NavFaq },
    NavLink {
        label: Key::NavContact,
    },
];

pub const SERVICES: &[ServiceCard] = &[
    ServiceCard {
        title: Key::ServiceHouseTitle,
        body: Key::ServiceHouseBody,
    },
    ServiceCard {
        title: Key::ServiceOfficeTitle,
        body: Key::ServiceOfficeBody,
    },
    ServiceCard {
        title: Key::ServiceAirconTitle,
        body: Key::ServiceAirconBody,
    },
];

pub const PICKUPS: &[PickupFeature] = &[
    PickupFeature {
        title: Key::PickupStaffTitle,
        body: Key::PickupStaffBody,
        tint: color!(0x415a77),
    },
    PickupFeature {
        title: Key::PickupEcoTitle,
        body: Key::PickupEcoBody,
        tint: color!(0x588157),
    },
];

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: Key::FaqDurationQ,
        answer: Key::FaqDurationA,
    },
    FaqEntry {
        question: Key::FaqPrepQ,
        answer: Key::FaqPrepA,
    },
    FaqEntry {
        question: Key::FaqPetsQ,
        answer: Key::FaqPetsA,
    },
];

// Page geometry (page coordinates, px). The reveal predicate works on these
// fixed positions rather than measured layout.
pub const HEADER_HEIGHT: f32 = 56.0;
pub const HERO_HEIGHT: f32 = 420.0;
pub const SECTION_HEADER_HEIGHT: f32 = 96.0;
pub const SERVICE_CARD_HEIGHT: f32 = 220.0;
pub const PICKUP_CARD_HEIGHT: f32 = 260.0;
pub const CARD_SPACING: f32 = 24.0;

/// `(top, height)` of every reveal-animated card in layout order:
/// the services row (one entry per card, same top), then each pickup split
pub fn reveal_layout() -> Vec<(f32, f32)> {
    let services_top = HERO_HEIGHT + SECTION_HEADER_HEIGHT;
    let pickup_top = services_top + SERVICE_CARD_HEIGHT + SECTION_HEADER_HEIGHT;

    let mut layout = Vec::new();
    for _ in SERVICES {
        layout.push((services_top, SERVICE_CARD_HEIGHT));
    }
    for i in 0..PICKUPS.len() {
        layout.push((
            pickup_top + i as f32 * (PICKUP_CARD_HEIGHT + CARD_SPACING),
            PICKUP_CARD_HEIGHT,
        ));
    }
    layout
}
