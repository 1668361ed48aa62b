use iced::Color;

// ─── THEME MODE ─────────────────────────────────────────────────

/// The shared light/dark flag. Starts light and is never saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    #[cfg(test)]
    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    /// Label for the toggle button: the mode it switches *to*.
    pub fn toggle_label(self) -> &'static str {
        match self {
            ThemeMode::Light => "☾ Dark",
            ThemeMode::Dark => "☀ Light",
        }
    }

    pub fn iced_theme(self) -> iced::Theme {
        match self {
            ThemeMode::Light => iced::Theme::Light,
            ThemeMode::Dark => iced::Theme::Dark,
        }
    }
}

// ─── PALETTE ────────────────────────────────────────────────────

/// Every color a view needs, resolved once per theme change.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    /// Translucent header/panel fill drawn over the background effect.
    pub glass: Color,
    pub footer_bg: Color,
    pub footer_text: Color,
    pub card_bg: Color,
    pub border: Color,
    pub text: Color,
    pub muted: Color,
    pub label: Color,
    // Accent
    pub accent: Color,
    pub accent_strong: Color,
    pub link: Color,
    pub chip_bg: Color,
    pub chip_text: Color,
    pub hover: Color,
    // Inputs
    pub input_bg: Color,
    pub input_border: Color,
    // Semantic
    pub award_bg: Color,
    pub award_text: Color,
    pub success: Color,
    pub error: Color,
    pub like: Color,
    pub timeline: Color,
}

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Palette {
        match mode {
            ThemeMode::Light => Palette {
                bg:            hex(0xf3, 0xf4, 0xf6),
                glass:         alpha(hex(0xff, 0xff, 0xff), 0.8),
                footer_bg:     alpha(hex(0x11, 0x18, 0x27), 0.8),
                footer_text:   hex(0xff, 0xff, 0xff),
                card_bg:       hex(0xff, 0xff, 0xff),
                border:        hex(0xe5, 0xe7, 0xeb),
                text:          hex(0x11, 0x18, 0x27),
                muted:         hex(0x4b, 0x55, 0x63),
                label:         hex(0x37, 0x41, 0x51),
                accent:        hex(0x3b, 0x82, 0xf6),
                accent_strong: hex(0x25, 0x63, 0xeb),
                link:          hex(0x25, 0x63, 0xeb),
                chip_bg:       hex(0xdb, 0xea, 0xfe),
                chip_text:     hex(0x25, 0x63, 0xeb),
                hover:         hex(0xe5, 0xe7, 0xeb),
                input_bg:      hex(0xff, 0xff, 0xff),
                input_border:  hex(0xd1, 0xd5, 0xdb),
                award_bg:      hex(0xfe, 0xf9, 0xc3),
                award_text:    hex(0x85, 0x4d, 0x0e),
                success:       hex(0x22, 0xc5, 0x5e),
                error:         hex(0xef, 0x44, 0x44),
                like:          hex(0xef, 0x44, 0x44),
                timeline:      hex(0xe5, 0xe7, 0xeb),
            },
            ThemeMode::Dark => Palette {
                bg:            hex(0x11, 0x18, 0x27),
                glass:         alpha(hex(0x1f, 0x29, 0x37), 0.8),
                footer_bg:     alpha(hex(0x1f, 0x29, 0x37), 0.8),
                footer_text:   hex(0xff, 0xff, 0xff),
                card_bg:       hex(0x1f, 0x29, 0x37),
                border:        hex(0x37, 0x41, 0x51),
                text:          hex(0xff, 0xff, 0xff),
                muted:         hex(0xd1, 0xd5, 0xdb),
                label:         hex(0xd1, 0xd5, 0xdb),
                accent:        hex(0x25, 0x63, 0xeb),
                accent_strong: hex(0x1d, 0x4e, 0xd8),
                link:          hex(0x60, 0xa5, 0xfa),
                chip_bg:       hex(0x37, 0x41, 0x51),
                chip_text:     hex(0x60, 0xa5, 0xfa),
                hover:         hex(0x37, 0x41, 0x51),
                input_bg:      hex(0x37, 0x41, 0x51),
                input_border:  hex(0x4b, 0x55, 0x63),
                award_bg:      hex(0x71, 0x3f, 0x12),
                award_text:    hex(0xfe, 0xf0, 0x8a),
                success:       hex(0x22, 0xc5, 0x5e),
                error:         hex(0xef, 0x44, 0x44),
                like:          hex(0xef, 0x44, 0x44),
                timeline:      hex(0x4b, 0x55, 0x63),
            },
        }
    }

    /// Same palette with every alpha scaled by `opacity` (page fade-in).
    pub fn faded(&self, opacity: f32) -> Palette {
        let t = opacity.clamp(0.0, 1.0);
        let f = |c: Color| Color { a: c.a * t, ..c };
        Palette {
            bg: f(self.bg),
            glass: f(self.glass),
            footer_bg: f(self.footer_bg),
            footer_text: f(self.footer_text),
            card_bg: f(self.card_bg),
            border: f(self.border),
            text: f(self.text),
            muted: f(self.muted),
            label: f(self.label),
            accent: f(self.accent),
            accent_strong: f(self.accent_strong),
            link: f(self.link),
            chip_bg: f(self.chip_bg),
            chip_text: f(self.chip_text),
            hover: f(self.hover),
            input_bg: f(self.input_bg),
            input_border: f(self.input_border),
            award_bg: f(self.award_bg),
            award_text: f(self.award_text),
            success: f(self.success),
            error: f(self.error),
            like: f(self.like),
            timeline: f(self.timeline),
        }
    }
}

const fn hex(r: u8, g: u8, b: u8) -> Color {
    Color::from_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
}

const fn alpha(c: Color, a: f32) -> Color {
    Color { a, ..c }
}

/// 0xRRGGBB → Color, as used by the background effect options.
pub fn color_from_u32(rgb: u32) -> Color {
    hex((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}
