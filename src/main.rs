#![windows_subsystem = "windows"]

mod assets;
mod contact;
mod content;
mod effect;
mod error;
mod gallery;
mod logging;
mod relay;
mod sections;
mod settings;
mod swipe;
mod theme;
mod timer;
mod ui;

use ui::Portfolio;

const ICON_SIZE: u32 = 32;

/// Window icon: the dark net accent on a rounded tile, drawn at startup.
fn window_icon() -> Option<iced::window::Icon> {
    let accent = [0x3a, 0x86, 0xff, 0xff];
    let tile = [0x11, 0x18, 0x27, 0xff];
    let mut rgba = Vec::with_capacity((ICON_SIZE * ICON_SIZE * 4) as usize);
    for y in 0..ICON_SIZE {
        for x in 0..ICON_SIZE {
            let on_grid = x % 8 == 3 || y % 8 == 3;
            rgba.extend_from_slice(if on_grid { &accent } else { &tile });
        }
    }
    iced::window::icon::from_rgba(rgba, ICON_SIZE, ICON_SIZE).ok()
}

fn main() -> iced::Result {
    logging::init();

    iced::application(Portfolio::title, Portfolio::update, Portfolio::view)
        .subscription(Portfolio::subscription)
        .theme(Portfolio::theme)
        .window(iced::window::Settings {
            icon: window_icon(),
            size: (1100.0, 760.0).into(),
            min_size: Some((480.0, 480.0).into()),
            exit_on_close_request: false,
            #[cfg(target_os = "linux")]
            platform_specific: iced::window::settings::PlatformSpecific {
                application_id: String::from("portfolio"),
                ..Default::default()
            },
            ..Default::default()
        })
        .run_with(Portfolio::new)
}
