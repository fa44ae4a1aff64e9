use super::super::messages::Message;
use super::super::state::{App, BODY_FONT_SIZE_PX, PROSE_MAX_WIDTH_PX};
use crate::routes::Route;
use iced::alignment::Horizontal;
use iced::widget::{Column, Row, button, column, container, text, tooltip};
use iced::{Element, Length};

const POEM: [&str; 4] = [
    "We lent it our hands until it learned to be its own.",
    "Now our hands hang still, with nothing left to make.",
    "We spent our lives in the making, and forgot how to be.",
    "Now our thoughts may build what hands never could.",
];
/// Line rendered in the muted style.
const MUTED_LINE: usize = 2;

impl App {
    pub(super) fn home_page(&self) -> Element<'_, Message> {
        let links = Row::with_children(
            Route::ALL
                .into_iter()
                .filter(|route| *route != Route::Home)
                .map(nav_link),
        )
        .spacing(12);

        let lines = POEM
            .iter()
            .enumerate()
            .map(|(index, line)| -> Element<'static, Message> {
                let line = text(*line).size(BODY_FONT_SIZE_PX);
                if index == MUTED_LINE {
                    line.style(text::secondary).into()
                } else {
                    line.into()
                }
            });
        let poem = container(
            column![
                Column::with_children(lines).spacing(6),
                text("— Me").size(BODY_FONT_SIZE_PX * 0.9),
            ]
            .spacing(16),
        )
        .style(container::rounded_box)
        .padding(24)
        .max_width(PROSE_MAX_WIDTH_PX);

        column![links, poem]
            .spacing(32)
            .align_x(Horizontal::Center)
            .width(Length::Fill)
            .into()
    }
}

fn nav_link(route: Route) -> Element<'static, Message> {
    let glyph = match route {
        Route::Home => "⌂",
        Route::Gallery => "🖼️",
        Route::AlgorithmSculpting => "✎",
        Route::Oklch => "◐",
    };
    tooltip(
        button(text(glyph).size(BODY_FONT_SIZE_PX * 1.4))
            .style(button::text)
            .on_press(Message::Navigate(route)),
        text(route.label()),
        tooltip::Position::Bottom,
    )
    .into()
}
