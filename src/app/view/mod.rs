mod gallery;
mod home;
mod oklch;
mod post;

use super::messages::Message;
use super::state::{App, BODY_FONT_SIZE_PX, HEADER_TITLE, PAGE_PADDING_PX, TITLE_FONT_SIZE_PX};
use crate::routes::Route;
use chrono::Datelike;
use iced::alignment::Vertical;
use iced::widget::{
    Column, button, column, container, horizontal_space, row, text, tooltip,
};
use iced::{Element, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let body: Element<'_, Message> = match self.route {
            Route::Home => self.home_page(),
            Route::Gallery => self.gallery_page(),
            Route::AlgorithmSculpting => self.post_page(),
            Route::Oklch => self.oklch_page(),
        };

        // The gallery runs edge to edge so a slide is exactly one viewport wide.
        let body: Element<'_, Message> = if self.route == Route::Gallery {
            container(body)
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        } else {
            container(body)
                .padding([0.0, PAGE_PADDING_PX])
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        };

        let layout: Column<'_, Message> = column![self.header(), body, self.footer()]
            .spacing(12)
            .height(Length::Fill);
        layout.into()
    }

    fn header(&self) -> Element<'_, Message> {
        let title = button(text(HEADER_TITLE).size(TITLE_FONT_SIZE_PX))
            .style(button::text)
            .padding(0)
            .on_press(Message::Navigate(Route::Home));

        let theme_toggle = tooltip(
            button(text(self.appearance.toggle_glyph()).size(BODY_FONT_SIZE_PX))
                .style(button::secondary)
                .on_press(Message::ToggleTheme),
            text(self.appearance.toggle_label()),
            tooltip::Position::Bottom,
        );

        let (audio_glyph, audio_label) = if self.audio.is_playing() {
            ("⏸", "Pause")
        } else {
            ("▶", "Play")
        };
        let audio_toggle = tooltip(
            button(text(audio_glyph).size(BODY_FONT_SIZE_PX))
                .style(button::secondary)
                .on_press(Message::ToggleAudio),
            text(audio_label),
            tooltip::Position::Bottom,
        );

        row![
            title,
            text(" / ").size(TITLE_FONT_SIZE_PX),
            text(self.route.label()).size(TITLE_FONT_SIZE_PX),
            horizontal_space(),
            theme_toggle,
            audio_toggle,
        ]
        .spacing(8)
        .padding([12.0, PAGE_PADDING_PX])
        .align_y(Vertical::Center)
        .width(Length::Fill)
        .into()
    }

    fn footer(&self) -> Element<'_, Message> {
        let year = chrono::Local::now().year();
        container(text(format!("© {year} OverFunction")).size(BODY_FONT_SIZE_PX * 0.8))
            .padding([8.0, PAGE_PADDING_PX])
            .width(Length::Fill)
            .into()
    }
}

/// Centered status line used by pages that have nothing else to show yet.
fn placeholder(message: &str) -> Element<'_, Message> {
    container(text(message).size(BODY_FONT_SIZE_PX))
        .center(Length::Fill)
        .into()
}
