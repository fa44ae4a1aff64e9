use super::super::messages::Message;
use super::super::state::{App, BODY_FONT_SIZE_PX, POST_MEDIA_WIDTH_PX, PROSE_MAX_WIDTH_PX};
use iced::widget::text::Wrapping;
use iced::widget::{Column, container, image, row, scrollable, text};
use iced::{ContentFit, Element, Length, Padding};

enum Block {
    Lead(&'static str),
    Heading(&'static str),
    Paragraph(&'static str),
    Bullet(&'static str),
}

const ALGORITHM_SCULPTING: &[Block] = &[
    Block::Lead("algorithm sculpting"),
    Block::Paragraph(
        "Discovery used to mean digging: dusty crates, late-night forums, whispered label \
         names. Today, we let algorithms deliver our taste to us like room service. \
         Convenient, and dangerously homogenizing.",
    ),
    Block::Paragraph(
        "These systems aren't neutral. They're designed to reinforce what's already \
         popular, drip-feeding us familiarity dressed up as personalization. Great for the \
         average listener. Deadly for a DJ chasing the unfamiliar.",
    ),
    Block::Heading("Method"),
    Block::Paragraph(
        "Create streaming accounts with crafted identities: blank slates taught from day \
         one to crave the obscure.",
    ),
    Block::Paragraph("Only feed them the sounds you want more of:"),
    Block::Bullet("Deep hypnotic grooves"),
    Block::Bullet("Strange percussive edits"),
    Block::Bullet("Niche corners of the underground"),
    Block::Heading("Chaos"),
    Block::Paragraph(
        "Occasionally inject pure chaos: a country anthem, a black-metal blast, a bubblegum \
         pop relic.",
    ),
    Block::Paragraph(
        "These anomalies jolt the system awake. They push it away from the comfortable \
         center and toward the weird perimeter, where innovation usually hides. A small act \
         of sabotage that produces beautifully unexpected outcomes.",
    ),
    Block::Paragraph(
        "In a world where machines decide what we hear, hacking the machine becomes a form \
         of creative authorship.",
    ),
    Block::Paragraph(
        "True digging isn't dead. It's evolving, and it's our job to stay one step ahead.",
    ),
];

impl App {
    pub(super) fn post_page(&self) -> Element<'_, Message> {
        let prose = Column::with_children(ALGORITHM_SCULPTING.iter().map(render_block))
            .spacing(12)
            .max_width(PROSE_MAX_WIDTH_PX);

        let media = image(self.post_image.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fixed(POST_MEDIA_WIDTH_PX));

        let content = container(row![prose, media].spacing(32)).padding(Padding {
            bottom: 24.0,
            ..Padding::ZERO
        });

        scrollable(content).height(Length::Fill).into()
    }
}

fn render_block(block: &Block) -> Element<'static, Message> {
    match block {
        Block::Lead(line) => text(*line).size(BODY_FONT_SIZE_PX * 1.4).into(),
        Block::Heading(line) => text(*line).size(BODY_FONT_SIZE_PX * 1.2).into(),
        Block::Paragraph(line) => text(*line)
            .size(BODY_FONT_SIZE_PX)
            .wrapping(Wrapping::Word)
            .into(),
        Block::Bullet(line) => text(format!("•  {line}")).size(BODY_FONT_SIZE_PX).into(),
    }
}
