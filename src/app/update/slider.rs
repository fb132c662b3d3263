//! Hero slider message handlers
//!
//! Every navigation source funnels into the carousel state machine; this
//! module's only extra job is kicking off the visual slide transition when
//! the cursor actually moved.

use iced::Task;
use iced::time::Instant;

use crate::app::{App, Message};
use crate::content;

impl App {
    pub(super) fn handle_slider(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::SliderTick => {
                if let Some(carousel) = &mut self.ui.carousel {
                    let last = carousel.cursor();
                    carousel.tick();
                    self.animate_slide(last, 1);
                }
                Some(Task::none())
            }

            Message::SliderNavigate(delta) => {
                if let Some(carousel) = &mut self.ui.carousel {
                    let last = carousel.cursor();
                    carousel.go_to(last as i64 + *delta as i64, true);
                    self.animate_slide(last, *delta);
                }
                Some(Task::none())
            }

            Message::SliderGoTo(index) => {
                if let Some(carousel) = &mut self.ui.carousel {
                    let last = carousel.cursor();
                    carousel.go_to(*index as i64, true);
                    let direction = if *index >= last { 1 } else { -1 };
                    self.animate_slide(last, direction);
                }
                Some(Task::none())
            }

            Message::SliderHoverEnter => {
                if let Some(carousel) = &mut self.ui.carousel {
                    carousel.hover_enter();
                }
                Some(Task::none())
            }

            Message::SliderHoverLeave => {
                if let Some(carousel) = &mut self.ui.carousel {
                    carousel.hover_leave();
                }
                Some(Task::none())
            }

            Message::SliderPressed => {
                let x = self.core.pointer_position.x;
                if let Some(carousel) = &mut self.ui.carousel {
                    carousel.drag_start(x);
                }
                Some(Task::none())
            }

            Message::PointerMoved(position) => {
                self.core.pointer_position = *position;
                if let Some(carousel) = &mut self.ui.carousel {
                    carousel.drag_move(position.x);
                }
                Some(Task::none())
            }

            Message::PointerReleased => {
                self.finish_drag();
                Some(Task::none())
            }

            Message::TouchStarted(position) => {
                // No widget hit-testing for raw touch events; the hero is the
                // page's top band, so test against its scrolled extent
                let hero_top = content::HEADER_HEIGHT - self.ui.scroll_top;
                let hero_bottom = hero_top + content::HERO_HEIGHT;
                if position.y > content::HEADER_HEIGHT
                    && position.y < hero_bottom
                    && let Some(carousel) = &mut self.ui.carousel
                {
                    carousel.drag_start(position.x);
                }
                Some(Task::none())
            }

            Message::TouchMoved(position) => {
                if let Some(carousel) = &mut self.ui.carousel {
                    carousel.drag_move(position.x);
                }
                Some(Task::none())
            }

            Message::TouchEnded => {
                self.finish_drag();
                Some(Task::none())
            }

            Message::TouchLost => {
                if let Some(carousel) = &mut self.ui.carousel {
                    carousel.drag_cancel();
                }
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Close the drag session and animate if the swipe navigated
    fn finish_drag(&mut self) {
        if let Some(carousel) = &mut self.ui.carousel {
            if !carousel.dragging() {
                return;
            }
            let last = carousel.cursor();
            if let Some(step) = carousel.drag_end() {
                self.animate_slide(last, step);
            }
        }
    }

    /// Start the slide transition from `last` toward the current cursor
    fn animate_slide(&mut self, last: usize, direction: i32) {
        let Some(carousel) = &self.ui.carousel else {
            return;
        };
        if carousel.cursor() == last {
            return;
        }
        let now = Instant::now();
        self.ui.slide_transition.last = last;
        self.ui.slide_transition.direction = direction;
        self.ui.slide_transition.animation = iced::animation::Animation::new(false).slow();
        self.ui.slide_transition.animation.go_mut(true, now);
    }
}
