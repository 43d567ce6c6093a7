//! Segment label

use embedded_graphics::{
    draw_target::DrawTarget, mono_font::MonoTextStyleBuilder, pixelcolor::Rgb565,
    primitives::Rectangle, Drawable,
};
use embedded_text::{
    alignment::{HorizontalAlignment, VerticalAlignment},
    style::TextBoxStyleBuilder,
    TextBox,
};

use crate::config::Theme;

/// Clear `area` and draw `text` centered in it
pub fn draw_label<D>(target: &mut D, text: &str, area: Rectangle, theme: &Theme) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    // Styling
    let character_style = MonoTextStyleBuilder::new()
        .font(theme.font)
        .text_color(theme.label)
        .background_color(theme.background)
        .build();
    let textbox_style = TextBoxStyleBuilder::new()
        .alignment(HorizontalAlignment::Center)
        .vertical_alignment(VerticalAlignment::Middle)
        .build();

    target.fill_solid(&area, theme.background)?;
    TextBox::with_textbox_style(text, area, character_style, textbox_style).draw(target)?;

    Ok(())
}
