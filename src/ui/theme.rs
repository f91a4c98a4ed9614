use ratatui::style::Color;

pub const COUNT_ACCENT: Color = Color::Rgb(0x7f, 0x52, 0xff);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HINT_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const INCREMENT: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const DECREMENT: Color = Color::Rgb(0xef, 0x44, 0x44);
