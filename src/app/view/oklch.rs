use super::super::messages::{Message, OklchChannel};
use super::super::state::{App, BODY_FONT_SIZE_PX, SWATCH_HEIGHT_PX, TINT_HEIGHT_PX};
use crate::oklch::{CHROMA_SLIDER_MAX, HUE_MAX, LIGHTNESS_MAX, Oklch};
use iced::alignment::Vertical;
use iced::widget::{Row, button, column, container, row, slider, text, text_input, tooltip};
use iced::{Background, Color, Element, Font, Length, Theme};

const FIELD_WIDTH_PX: f32 = 80.0;

impl App {
    pub(super) fn oklch_page(&self) -> Element<'_, Message> {
        let state = &self.oklch;
        let color = state.color;
        let preview = color.to_srgb();
        let css = color.css();

        let swatch = container(text(""))
            .width(Length::Fill)
            .height(Length::Fixed(SWATCH_HEIGHT_PX))
            .style(move |_theme: &Theme| filled(preview.color));

        let controls = column![
            channel_row(
                "L",
                "%",
                slider(0.0..=LIGHTNESS_MAX, color.lightness, |v| {
                    Message::OklchChanged(OklchChannel::Lightness, v)
                })
                .step(1.0)
                .into(),
                OklchChannel::Lightness,
                &state.lightness_input,
            ),
            channel_row(
                "C",
                "",
                slider(0.0..=CHROMA_SLIDER_MAX, color.chroma, |v| {
                    Message::OklchChanged(OklchChannel::Chroma, v)
                })
                .step(0.001)
                .into(),
                OklchChannel::Chroma,
                &state.chroma_input,
            ),
            channel_row(
                "h",
                "°",
                slider(0.0..=HUE_MAX, color.hue, |v| {
                    Message::OklchChanged(OklchChannel::Hue, v)
                })
                .step(1.0)
                .into(),
                OklchChannel::Hue,
                &state.hue_input,
            ),
            row![
                text(format!("background: {css};"))
                    .font(Font::MONOSPACE)
                    .size(BODY_FONT_SIZE_PX),
                button("copy")
                    .style(button::secondary)
                    .on_press(Message::CopyOklch),
            ]
            .spacing(12)
            .align_y(Vertical::Center),
        ]
        .spacing(10);

        let mut page = column![swatch, controls].spacing(20);
        if !preview.in_gamut {
            page = page.push(
                text("This colour is outside sRGB; the preview shows the nearest displayable one.")
                    .size(BODY_FONT_SIZE_PX * 0.85)
                    .style(text::secondary),
            );
        }
        page.push(tint_strip(&color)).width(Length::Fill).into()
    }
}

fn channel_row<'a>(
    label: &'a str,
    unit: &'a str,
    slider: Element<'a, Message>,
    channel: OklchChannel,
    raw: &'a str,
) -> Element<'a, Message> {
    row![
        text(label).size(BODY_FONT_SIZE_PX).width(Length::Fixed(20.0)),
        slider,
        text_input("", raw)
            .on_input(move |value| Message::OklchInputChanged(channel, value))
            .width(Length::Fixed(FIELD_WIDTH_PX)),
        text(unit).size(BODY_FONT_SIZE_PX),
    ]
    .spacing(10)
    .align_y(Vertical::Center)
    .into()
}

fn tint_strip(color: &Oklch) -> Element<'static, Message> {
    let swatches = color
        .tints()
        .into_iter()
        .map(|tint| -> Element<'static, Message> {
            let fill = tint.to_srgb().color;
            tooltip(
                container(text(""))
                    .width(Length::Fill)
                    .height(Length::Fixed(TINT_HEIGHT_PX))
                    .style(move |_theme: &Theme| filled(fill)),
                text(tint.css()),
                tooltip::Position::Bottom,
            )
            .into()
        });
    Row::with_children(swatches).spacing(4).width(Length::Fill).into()
}

fn filled(color: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(color)),
        ..container::Style::default()
    }
}
