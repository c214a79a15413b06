use termimad::{
    MadSkin,
    crossterm::style::{Attribute, Color},
};

/// Warm, low-contrast palette for history output.
pub struct Sepia;

impl Sepia {
    pub fn skin() -> MadSkin {
        let mut skin = MadSkin::default();

        skin.paragraph.set_fg(Sepia::FG);
        skin.bold.set_fg(Sepia::GOLD);
        skin.bold.add_attr(Attribute::Bold);
        skin.italic.set_fg(Sepia::MUTED);

        skin.headers[0].set_fg(Sepia::RUST);
        skin.headers[0].add_attr(Attribute::Bold);

        skin.table.set_fg(Sepia::MUTED);
        skin.bullet.set_fg(Sepia::RUST);
        skin.inline_code.set_fg(Sepia::OLIVE);

        skin
    }

    pub const FG: Color = Color::Rgb {
        r: 0xE8,
        g: 0xDC,
        b: 0xC4,
    }; // #E8DCC4
    pub const MUTED: Color = Color::Rgb {
        r: 0x9C,
        g: 0x8F,
        b: 0x7A,
    }; // #9C8F7A
    pub const GOLD: Color = Color::Rgb {
        r: 0xE0,
        g: 0xB0,
        b: 0x5A,
    }; // #E0B05A
    pub const RUST: Color = Color::Rgb {
        r: 0xC2,
        g: 0x6A,
        b: 0x3D,
    }; // #C26A3D
    pub const OLIVE: Color = Color::Rgb {
        r: 0x9A,
        g: 0xA8,
        b: 0x5B,
    }; // #9AA85B
}
