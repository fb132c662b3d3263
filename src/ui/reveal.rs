//! Scroll-triggered reveal animations
//!
//! Cards fade in the first time they enter the scrolled viewport and then
//! stay revealed. Visibility is a pure predicate over the scroll offset, so
//! the trigger logic tests without a rendering surface.

use iced::animation::Animation;
use iced::time::Instant;

/// Fraction of the viewport height trimmed off the bottom before the
/// visibility check, so cards reveal slightly after entering the window
const BOTTOM_MARGIN: f32 = 0.10;

/// Fraction of a card that must be visible before it reveals
const VISIBLE_RATIO: f32 = 0.15;

/// Whether a card at `card_top..card_top + card_height` (page coordinates)
/// is sufficiently inside the viewport scrolled to `scroll_top`
pub fn enters_viewport(
    card_top: f32,
    card_height: f32,
    scroll_top: f32,
    viewport_height: f32,
) -> bool {
    if card_height <= 0.0 || viewport_height <= 0.0 {
        return false;
    }
    let view_bottom = scroll_top + viewport_height * (1.0 - BOTTOM_MARGIN);
    let visible = (card_top + card_height).min(view_bottom) - card_top.max(scroll_top);
    visible / card_height >= VISIBLE_RATIO
}

struct RevealCard {
    top: f32,
    height: f32,
    revealed: bool,
    animation: Animation<bool>,
}

/// Reveal state for every animated card on the page, in layout order
pub struct Reveals {
    cards: Vec<RevealCard>,
}

impl Reveals {
    /// Track cards at the given `(top, height)` page positions
    pub fn new(layout: &[(f32, f32)]) -> Self {
        Self {
            cards: layout
                .iter()
                .map(|&(top, height)| RevealCard {
                    top,
                    height,
                    revealed: false,
                    animation: Animation::new(false),
                })
                .collect(),
        }
    }

    /// Re-evaluate visibility after a scroll or resize.
    ///
    /// Revealing is one-shot: once a card has animated in it is never
    /// hidden again, matching observe-then-unobserve behavior.
    pub fn on_viewport_change(&mut self, scroll_top: f32, viewport_height: f32, now: Instant) {
        for card in &mut self.cards {
            if !card.revealed
                && enters_viewport(card.top, card.height, scroll_top, viewport_height)
            {
                card.revealed = true;
                card.animation = Animation::new(false).slow();
                card.animation.go_mut(true, now);
            }
        }
    }

    /// Fade-in progress for card `index`, 0.0 (hidden) to 1.0 (settled)
    pub fn progress(&self, index: usize, now: Instant) -> f32 {
        self.cards
            .get(index)
            .map(|card| {
                if card.revealed {
                    card.animation.interpolate(0.0_f32, 1.0_f32, now)
                } else {
                    0.0
                }
            })
            .unwrap_or(1.0)
    }

    /// Whether any card is mid fade-in
    pub fn is_animating(&self, now: Instant) -> bool {
        self.cards.iter().any(|card| card.animation.is_animating(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_below_the_fold_stays_hidden() {
        assert!(!enters_viewport(2000.0, 300.0, 0.0, 900.0));
    }

    #[test]
    fn card_scrolled_into_view_reveals() {
        // Viewport 0..900, effective bottom 810; card 600..900 has 210 px
        // visible, 70% of its height
        assert!(enters_viewport(600.0, 300.0, 0.0, 900.0));
    }

    #[test]
    fn bottom_margin_delays_the_trigger() {
        // Card top sits at 805 with effective bottom 810: only 5 of 300 px
        // visible, under the 15% ratio
        assert!(!enters_viewport(805.0, 300.0, 0.0, 900.0));
        // Scrolling 100 px further exposes enough of it
        assert!(enters_viewport(805.0, 300.0, 100.0, 900.0));
    }

    #[test]
    fn reveal_is_one_shot() {
        let mut reveals = Reveals::new(&[(1500.0, 300.0)]);
        let now = Instant::now();
        reveals.on_viewport_change(1200.0, 900.0, now);
        assert!(reveals.progress(0, now) >= 0.0);
        assert!(reveals.cards[0].revealed);

        // Scrolling back above the card must not hide it again
        reveals.on_viewport_change(0.0, 900.0, now);
        assert!(reveals.cards[0].revealed, "revealed cards stay revealed");
    }

    #[test]
    fn untracked_index_renders_fully_visible() {
        let reveals = Reveals::new(&[]);
        assert_eq!(reveals.progress(7, Instant::now()), 1.0);
    }
}
