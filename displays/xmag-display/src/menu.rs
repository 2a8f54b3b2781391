//! Title screen
//!
//! Shown until the confirm button is pressed. Each action label is drawn
//! in the colour of the knob whose button triggers it, so remapping the
//! buttons in config recolours the menu.

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_9X15};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::{Drawable, Point};
use embedded_graphics::text::{Baseline, Text};
use heapless::{String, Vec};
use xmag_core::input::Button;

use crate::pixel::Pixel;
use crate::raster::Raster;
use crate::text::Scaled;

/// Longest label a menu item can hold
pub const MAX_LABEL_LEN: usize = 16;

/// Title plus actions
pub const MAX_MENU_ITEMS: usize = 4;

const TITLE_HUE: u32 = 210;

/// Colour of the knob cap that carries `button`
pub const fn button_color(button: Button) -> Pixel {
    match button {
        Button::Blue => Pixel::from_hsv(240, 255, 255),
        Button::Green => Pixel::from_hsv(120, 255, 255),
        Button::Red => Pixel::from_hsv(0, 255, 255),
    }
}

/// One line of text on the title screen
#[derive(Clone)]
pub struct MenuItem {
    /// Text shown, at most [`MAX_LABEL_LEN`] bytes
    pub label: String<MAX_LABEL_LEN>,
    pub color: Pixel,
    pub font: &'static MonoFont<'static>,
    /// Each font pixel becomes a `scale × scale` block
    pub scale: u32,
    /// Top edge in frame coordinates
    pub y: i32,
}

impl MenuItem {
    /// Create an item; labels longer than [`MAX_LABEL_LEN`] are truncated
    pub fn new(
        text: &str,
        color: Pixel,
        font: &'static MonoFont<'static>,
        scale: u32,
        y: i32,
    ) -> Self {
        let mut label = String::new();
        for c in text.chars() {
            if label.push(c).is_err() {
                break;
            }
        }

        Self {
            label,
            color,
            font,
            scale: scale.max(1),
            y,
        }
    }

    /// Rendered width in frame pixels
    pub fn width(&self) -> u32 {
        let advance = self.font.character_size.width + self.font.character_spacing;
        let chars = self.label.chars().count() as u32;
        chars.saturating_mul(advance).saturating_mul(self.scale)
    }

    /// Top-left corner that centers the item horizontally on a canvas
    pub fn origin(&self, canvas_width: u32) -> Point {
        let x = (canvas_width as i32 - self.width() as i32) / 2;
        Point::new(x, self.y)
    }

    /// Draw the item onto `frame`, clipped to its edges
    pub fn draw(&self, frame: &mut Raster) {
        let origin = self.origin(frame.width());
        let style = MonoTextStyle::new(self.font, Rgb565::from(self.color));
        let mut scaled = Scaled::new(frame, origin, self.scale);
        let Ok(_) = Text::with_baseline(&self.label, Point::zero(), style, Baseline::Top)
            .draw(&mut scaled);
    }
}

/// Start/quit menu
#[derive(Clone)]
pub struct TitleScreen {
    /// Drawn top to bottom in this order
    items: Vec<MenuItem, MAX_MENU_ITEMS>,
}

impl TitleScreen {
    /// Build the menu for the given button bindings
    pub fn new(confirm: Button, quit: Button) -> Self {
        let mut items = Vec::new();
        items.extend([
            MenuItem::new(
                "X-MAG",
                Pixel::from_hsv(TITLE_HUE, 255, 255),
                &FONT_10X20,
                4,
                50,
            ),
            MenuItem::new("START", button_color(confirm), &FONT_9X15, 3, 170),
            MenuItem::new("QUIT", button_color(quit), &FONT_9X15, 3, 235),
        ]);
        Self { items }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Clear `frame` to black and draw every item
    pub fn render(&self, frame: &mut Raster) {
        frame.fill(Pixel::BLACK);
        for item in &self.items {
            item.draw(frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_in_band(frame: &Raster, color: Pixel, rows: core::ops::Range<u32>) -> usize {
        rows.flat_map(|y| (0..frame.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| frame.get(x, y) == Some(color))
            .count()
    }

    #[test]
    fn test_button_colors_distinct() {
        assert_ne!(button_color(Button::Blue), button_color(Button::Green));
        assert_ne!(button_color(Button::Green), button_color(Button::Red));
        assert_ne!(button_color(Button::Red), button_color(Button::Blue));
        assert_eq!(button_color(Button::Red), Pixel::RED);
    }

    #[test]
    fn test_label_truncated() {
        let item = MenuItem::new("ABCDEFGHIJKLMNOPQRSTUVWXYZ", Pixel::WHITE, &FONT_9X15, 1, 0);
        assert_eq!(item.label.len(), MAX_LABEL_LEN);
    }

    #[test]
    fn test_items_centered() {
        let screen = TitleScreen::new(Button::Green, Button::Blue);
        let items = screen.items();
        assert_eq!(items.len(), 3);

        // 5 glyphs * 10 px * 4
        assert_eq!(items[0].width(), 200);
        assert_eq!(items[0].origin(480), Point::new(140, 50));
        // 5 glyphs * 9 px * 3
        assert_eq!(items[1].origin(480), Point::new(172, 170));
        // 4 glyphs * 9 px * 3
        assert_eq!(items[2].origin(480), Point::new(186, 235));
    }

    #[test]
    fn test_render_uses_bound_colors() {
        let mut frame = Raster::new(480, 320, Pixel::WHITE).unwrap();
        TitleScreen::new(Button::Green, Button::Blue).render(&mut frame);

        let green = button_color(Button::Green);
        let blue = button_color(Button::Blue);
        assert!(count_in_band(&frame, green, 170..215) > 0);
        assert_eq!(count_in_band(&frame, blue, 170..215), 0);
        assert!(count_in_band(&frame, blue, 235..280) > 0);
        assert_eq!(count_in_band(&frame, green, 235..280), 0);

        // Background cleared
        assert_eq!(frame.get(0, 0), Some(Pixel::BLACK));
        assert_eq!(frame.get(479, 319), Some(Pixel::BLACK));
    }

    #[test]
    fn test_swapped_bindings_recolor() {
        let mut frame = Raster::new(480, 320, Pixel::BLACK).unwrap();
        TitleScreen::new(Button::Red, Button::Green).render(&mut frame);

        assert!(count_in_band(&frame, Pixel::RED, 170..215) > 0);
        assert!(count_in_band(&frame, button_color(Button::Green), 235..280) > 0);
    }

    #[test]
    fn test_render_clips_on_small_frame() {
        let mut frame = Raster::new(100, 60, Pixel::WHITE).unwrap();
        TitleScreen::new(Button::Green, Button::Blue).render(&mut frame);
        assert_eq!(frame.get(0, 0), Some(Pixel::BLACK));
        assert_eq!(frame.get(99, 0), Some(Pixel::BLACK));
    }
}
