use termimad::{
    Alignment, MadSkin,
    crossterm::style::{Attribute, Color},
};

/// Terminal skin built around the mood palette.
pub struct Theme;

impl Theme {
    pub const GREEN: Color = Color::Rgb {
        r: 0x10,
        g: 0xb9,
        b: 0x81,
    }; // #10b981
    pub const VIOLET: Color = Color::Rgb {
        r: 0x8b,
        g: 0x5c,
        b: 0xf6,
    }; // #8b5cf6
    pub const AMBER: Color = Color::Rgb {
        r: 0xf5,
        g: 0x9e,
        b: 0x0b,
    }; // #f59e0b
    pub const INDIGO: Color = Color::Rgb {
        r: 0x63,
        g: 0x66,
        b: 0xf1,
    }; // #6366f1
    pub const SLATE: Color = Color::Rgb {
        r: 0x64,
        g: 0x74,
        b: 0x8b,
    }; // #64748b

    pub fn skin() -> MadSkin {
        let mut skin = MadSkin::default();

        skin.headers[0].set_fg(Self::GREEN);
        skin.headers[0].add_attr(Attribute::Bold);
        skin.headers[0].align = Alignment::Left;

        skin.headers[1].set_fg(Self::AMBER);
        skin.headers[1].add_attr(Attribute::Bold);

        skin.headers[2].set_fg(Self::VIOLET);

        skin.bold.set_fg(Self::GREEN);
        skin.table.set_fg(Self::INDIGO);
        skin.bullet.set_fg(Self::AMBER);
        skin.inline_code.set_fg(Self::VIOLET);
        skin.quote_mark.set_fg(Self::SLATE);

        skin
    }
}
