mod reducer;
mod runtime;
mod shortcuts;

#[cfg(test)]
mod tests;

use super::super::messages::Message;
use super::super::state::{
    ANIMATION_FRAME_INTERVAL, App, HINT_POLL_INTERVAL, SIGNAL_POLL_INTERVAL,
};
use iced::event;
use iced::time;
use iced::{Subscription, Task};

impl App {
    pub fn subscription(app: &App) -> Subscription<Message> {
        let mut subscriptions: Vec<Subscription<Message>> = vec![
            event::listen_with(runtime::runtime_event_to_message),
            time::every(SIGNAL_POLL_INTERVAL).map(|_| Message::PollSystemSignals),
        ];

        // Timers exist only while a carousel is mounted; unmounting drops them.
        if let Some(view) = app.gallery.view() {
            if view.carousel.hint_visible() {
                subscriptions.push(time::every(HINT_POLL_INTERVAL).map(Message::HintTick));
            }
            if view.animation.is_some() {
                subscriptions
                    .push(time::every(ANIMATION_FRAME_INTERVAL).map(Message::AnimationFrame));
            }
        }

        Subscription::batch(subscriptions)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let effects = self.reduce(message);
        if effects.is_empty() {
            Task::none()
        } else {
            Task::batch(effects.into_iter().map(|effect| self.run_effect(effect)))
        }
    }
}
