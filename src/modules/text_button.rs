/*
A clickable rectangle with a centered label.

Check the click against rect() when the mouse is pressed, then draw the
button once per frame wherever it should appear:

    let btn_text = TextButton::new(800.0, 200.0, 200.0, 60.0, "Click Me", BLUE, GREEN, 30);
    if is_mouse_button_pressed(MouseButton::Left) && btn_text.rect().contains(mouse) {
        println!("Button clicked!");
    }
    btn_text.draw(btn_text.rect().contains(mouse));
*/

use macroquad::prelude::*;

pub struct TextButton {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    text: String,
    normal_color: Color,
    hover_color: Color,
    text_color: Color,
    font_size: u16,
}

impl TextButton {
    pub fn new(x: f32, y: f32, width: f32, height: f32, text: impl Into<String>, normal_color: Color, hover_color: Color, font_size: u16) -> Self {
        TextButton {
            x,
            y,
            width,
            height,
            text: text.into(),
            normal_color,
            hover_color,
            text_color: WHITE,
            font_size,
        }
    }

    pub fn from_rect(rect: Rect, text: impl Into<String>, normal_color: Color, hover_color: Color, font_size: u16) -> Self {
        TextButton::new(rect.x, rect.y, rect.w, rect.h, text, normal_color, hover_color, font_size)
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Draws the button, in the hover color when the mouse is over it
    pub fn draw(&self, hovered: bool) {
        let fill = if hovered { self.hover_color } else { self.normal_color };
        draw_rectangle(self.x, self.y, self.width, self.height, fill);

        // Center the label inside the button
        let dims = measure_text(&self.text, None, self.font_size, 1.0);
        let text_x = self.x + (self.width - dims.width) / 2.0;
        let text_y = self.y + (self.height + dims.offset_y) / 2.0;
        draw_text(&self.text, text_x, text_y, self.font_size as f32, self.text_color);
    }
}
