use iced::widget::canvas::Canvas;
use iced::widget::{
    button, column, container, image, mouse_area, opaque, row, scrollable, stack, text,
    text_editor, text_input, Column, Row, Space,
};
use iced::{keyboard, task, touch, window};
use iced::{
    Alignment, Background, Border, Color, ContentFit, Element, Font, Length, Shadow, Subscription,
    Task, Theme, Vector,
};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::assets::{self, AssetId, Assets};
use crate::contact::{ContactForm, Field, SubmissionStatus};
use crate::content::{self, Education, Experience, Project};
use crate::effect::{BackgroundCoordinator, EffectOptions, NetEffect};
use crate::error::{AssetError, EffectError, RelayError};
use crate::gallery::{Gallery, Photo};
use crate::relay::{EmailJsRelay, EmailRelay, RelayRequest};
use crate::sections::{Direction, Navigator, Section, SectionId, SECTIONS};
use crate::settings::Settings;
use crate::swipe::{MoveOutcome, SwipeRecognizer};
use crate::theme::{Palette, ThemeMode};
use crate::timer::{TimerSlot, TimerToken};

/// Send a desktop notification (best-effort).
fn send_notification(title: &str, body: &str) {
    let _ = notify_rust::Notification::new()
        .summary(title)
        .body(body)
        .appname("Portfolio")
        .timeout(notify_rust::Timeout::Milliseconds(5000))
        .show();
}

// ─── ANIMATION CONSTANTS ────────────────────────────────────────
const ANIM_TICK_MS: u64 = 33; // ~30fps for the background and fades
const FADE_SPEED: f32 = 0.08; // fade-in speed per tick
const NOTICE_SECS: u64 = 3;

const CONTENT_MAX_WIDTH: f32 = 960.0;
const GALLERY_COLUMNS: usize = 3;

const BOLD: Font = Font {
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

type EffectFactory = fn(EffectOptions) -> Result<NetEffect, EffectError>;

// ─── MESSAGE ────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub enum Message {
    AnimTick,
    /// Menu press, by section key.
    SectionSelected(&'static str),
    ToggleTheme,
    // Input
    Touch(touch::Event),
    KeyPressed(keyboard::Key, keyboard::Modifiers),
    // Background
    EffectInitElapsed(TimerToken),
    // Media
    ImageLoaded(AssetId, Result<image::Handle, AssetError>),
    DownloadResume,
    ResumeSaved(Result<PathBuf, AssetError>),
    // Gallery
    ToggleLike(u32),
    ExpandPhoto(u32),
    ClosePhoto,
    OverlayContentPressed,
    // Contact
    ContactField(Field, String),
    MessageEdited(text_editor::Action),
    SubmitContact,
    SubmissionFinished(Result<(), RelayError>),
    StatusResetElapsed(TimerToken),
    // Links & notices
    CopyLink(String),
    NoticeElapsed(TimerToken),
    // Window
    CloseRequested(window::Id),
}

#[derive(Debug, Clone)]
enum ImageSlot {
    Loading,
    Ready(image::Handle),
    Failed,
}

// ─── APP STATE ──────────────────────────────────────────────────

pub struct Portfolio {
    settings: Settings,
    assets: Assets,
    relay: Arc<dyn EmailRelay>,

    navigator: Navigator,
    mode: ThemeMode,
    pal: Palette,

    // Gestures
    swipe: SwipeRecognizer,
    active_finger: Option<touch::Finger>,

    background: BackgroundCoordinator<NetEffect, EffectFactory>,
    gallery: Gallery,
    images: HashMap<AssetId, ImageSlot>,
    placeholder: image::Handle,

    contact: ContactForm,
    message_editor: text_editor::Content,

    notice: Option<String>,
    notice_timer: TimerSlot,

    // Pending sleeps; dropping a handle aborts it.
    effect_init_task: Option<task::Handle>,
    status_reset_task: Option<task::Handle>,
    notice_task: Option<task::Handle>,

    // Animation
    page_opacity: f32,
    closing: bool,
}

impl Portfolio {
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        let relay: Arc<dyn EmailRelay> = Arc::new(EmailJsRelay::new(settings.relay.endpoint.clone()));
        Self::with_relay(settings, relay)
    }

    pub fn with_relay(settings: Settings, relay: Arc<dyn EmailRelay>) -> (Self, Task<Message>) {
        let assets = Assets::new(settings.assets_dir.clone());
        let gallery = Gallery::default();

        let mut media: Vec<AssetId> = vec![AssetId::Headshot];
        media.extend(content::EDUCATION.iter().map(|e| AssetId::Logo(e.logo)));
        media.extend(gallery.photos().iter().map(|p| p.asset));

        let mut app = Self {
            swipe: SwipeRecognizer::new(settings.swipe_thresholds()),
            active_finger: None,
            navigator: Navigator::default(),
            mode: ThemeMode::default(),
            pal: Palette::for_mode(ThemeMode::default()),
            background: BackgroundCoordinator::new(NetEffect::new as EffectFactory),
            images: media.iter().map(|&id| (id, ImageSlot::Loading)).collect(),
            placeholder: assets::placeholder(),
            gallery,
            contact: ContactForm::default(),
            message_editor: text_editor::Content::new(),
            notice: None,
            notice_timer: TimerSlot::default(),
            effect_init_task: None,
            status_reset_task: None,
            notice_task: None,
            page_opacity: 1.0,
            closing: false,
            assets,
            relay,
            settings,
        };

        let loads = media.into_iter().map(|id| {
            let path = app.assets.path(id);
            Task::perform(assets::load_image(path), move |result| Message::ImageLoaded(id, result))
        });
        let mut tasks: Vec<Task<Message>> = loads.collect();

        if let Some(token) = app.background.mount() {
            let (sleep, handle) = delay(app.settings.effect_init_delay(), Message::EffectInitElapsed(token));
            app.effect_init_task = Some(handle);
            tasks.push(sleep);
        }

        tracing::info!("Portfolio started (assets in {})", app.settings.assets_dir.display());
        (app, Task::batch(tasks))
    }

    pub fn title(&self) -> String {
        format!("{} | Portfolio", content::OWNER)
    }

    pub fn theme(&self) -> Theme {
        self.mode.iced_theme()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.closing {
            return Subscription::none();
        }
        let anim_tick = iced::time::every(Duration::from_millis(ANIM_TICK_MS))
            .map(|_| Message::AnimTick);
        let keys = keyboard::on_key_press(|key, modifiers| {
            Some(Message::KeyPressed(key, modifiers))
        });
        let touches = iced::event::listen_with(|event, _status, _window| match event {
            iced::Event::Touch(touch) => Some(Message::Touch(touch)),
            _ => None,
        });
        let close = window::close_requests().map(Message::CloseRequested);
        Subscription::batch([anim_tick, keys, touches, close])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::AnimTick => {
                if let Some(effect) = self.background.effect_mut() {
                    effect.advance(ANIM_TICK_MS as f32 / 1000.0);
                }
                if self.page_opacity < 1.0 {
                    self.page_opacity = (self.page_opacity + FADE_SPEED).min(1.0);
                }
            }
            Message::SectionSelected(key) => {
                let before = self.navigator.active();
                if !self.navigator.select_key(key) {
                    tracing::warn!("Unknown section '{key}'");
                } else if self.navigator.active() != before {
                    self.on_section_changed();
                }
            }
            Message::ToggleTheme => {
                self.mode = self.mode.toggle();
                self.pal = Palette::for_mode(self.mode);
                self.background.apply_theme(self.mode);
                tracing::debug!("Theme switched to {:?}", self.mode);
            }
            Message::Touch(event) => self.on_touch(event),
            Message::KeyPressed(key, _modifiers) => {
                use keyboard::key::Named;
                match key {
                    keyboard::Key::Named(Named::ArrowRight) => self.navigate(Direction::Next),
                    keyboard::Key::Named(Named::ArrowLeft) => self.navigate(Direction::Previous),
                    keyboard::Key::Named(Named::Escape) => self.gallery.close(),
                    _ => {}
                }
            }
            Message::EffectInitElapsed(token) => {
                self.effect_init_task = None;
                self.background.on_init_elapsed(token, self.mode);
            }
            Message::ImageLoaded(id, result) => {
                let slot = match result {
                    Ok(handle) => ImageSlot::Ready(handle),
                    Err(e) => {
                        tracing::warn!("Image unavailable: {e}");
                        ImageSlot::Failed
                    }
                };
                self.images.insert(id, slot);
            }
            Message::DownloadResume => {
                let source = self.assets.path(AssetId::Resume);
                return match assets::download_dir() {
                    Ok(dir) => Task::perform(assets::download_resume(source, dir), Message::ResumeSaved),
                    Err(e) => {
                        tracing::error!("Résumé download failed: {e}");
                        self.show_notice("Could not save the résumé")
                    }
                };
            }
            Message::ResumeSaved(Ok(path)) => {
                tracing::info!("Résumé saved to {}", path.display());
                send_notification("Résumé downloaded", &path.display().to_string());
                return self.show_notice(format!("Saved to {}", path.display()));
            }
            Message::ResumeSaved(Err(e)) => {
                tracing::error!("Résumé download failed: {e}");
                return self.show_notice("Could not save the résumé");
            }
            Message::ToggleLike(id) => {
                if self.gallery.toggle_like(id).is_none() {
                    tracing::warn!("Like toggled for unknown photo {id}");
                }
            }
            Message::ExpandPhoto(id) => {
                self.gallery.expand(id);
            }
            Message::ClosePhoto => self.gallery.close(),
            Message::OverlayContentPressed => {}
            Message::ContactField(field, value) => self.contact.set(field, value),
            Message::MessageEdited(action) => {
                let is_edit = action.is_edit();
                self.message_editor.perform(action);
                if is_edit {
                    self.contact.set(Field::Message, self.message_editor.text());
                }
            }
            Message::SubmitContact => return self.submit_contact(),
            Message::SubmissionFinished(outcome) => {
                if let Some(token) = self.contact.finish(outcome) {
                    if self.contact.status() == SubmissionStatus::Success {
                        self.message_editor = text_editor::Content::new();
                    }
                    let (sleep, handle) = delay(self.settings.status_reset_delay(), Message::StatusResetElapsed(token));
                    self.status_reset_task = Some(handle);
                    return sleep;
                }
            }
            Message::StatusResetElapsed(token) => {
                if self.contact.on_reset_elapsed(token) {
                    self.status_reset_task = None;
                }
            }
            Message::CopyLink(target) => {
                let notice = format!("Copied {target}");
                return Task::batch([iced::clipboard::write(target), self.show_notice(notice)]);
            }
            Message::NoticeElapsed(token) => {
                if self.notice_timer.fire(token) {
                    self.notice = None;
                    self.notice_task = None;
                }
            }
            Message::CloseRequested(id) => {
                self.teardown();
                return window::close(id);
            }
        }
        Task::none()
    }

    fn navigate(&mut self, direction: Direction) {
        if self.navigator.navigate(direction) {
            self.on_section_changed();
        }
    }

    fn on_section_changed(&mut self) {
        // The overlay belongs to the gallery view.
        self.gallery.close();
        self.page_opacity = 0.0;
        tracing::debug!("Section: {}", self.navigator.active().section().key);
    }

    /// Feed the swipe recognizer. Only the finger that started a sequence drives it.
    fn on_touch(&mut self, event: touch::Event) {
        match event {
            touch::Event::FingerPressed { id, position } => {
                if self.active_finger.is_none() {
                    self.active_finger = Some(id);
                    self.swipe.touch_start(position);
                }
            }
            touch::Event::FingerMoved { id, position } if self.active_finger == Some(id) => {
                if self.swipe.touch_move(position) == MoveOutcome::SuppressDefault {
                    tracing::trace!("Horizontal swipe in progress");
                }
            }
            touch::Event::FingerLifted { id, position } if self.active_finger == Some(id) => {
                self.active_finger = None;
                if let Some(direction) = self.swipe.touch_end(position) {
                    self.navigate(direction);
                }
            }
            touch::Event::FingerLost { id, .. } if self.active_finger == Some(id) => {
                self.active_finger = None;
                self.swipe.cancel();
            }
            _ => {}
        }
    }

    fn submit_contact(&mut self) -> Task<Message> {
        match self.contact.begin_submit() {
            Ok(fields) => {
                let request = RelayRequest::new(&self.settings.relay, fields);
                let relay = Arc::clone(&self.relay);
                Task::perform(async move { relay.send(request).await }, Message::SubmissionFinished)
            }
            Err(e) => {
                tracing::debug!("Submission refused: {e}");
                Task::none()
            }
        }
    }

    fn show_notice(&mut self, notice: impl Into<String>) -> Task<Message> {
        self.notice = Some(notice.into());
        let token = self.notice_timer.arm();
        let (sleep, handle) = delay(Duration::from_secs(NOTICE_SECS), Message::NoticeElapsed(token));
        self.notice_task = Some(handle);
        sleep
    }

    /// Cancel every timer and release the background effect.
    fn teardown(&mut self) {
        if self.closing {
            return;
        }
        self.closing = true;
        self.background.teardown();
        self.contact.cancel_timers();
        self.notice_timer.cancel();
        for handle in [
            self.effect_init_task.take(),
            self.status_reset_task.take(),
            self.notice_task.take(),
        ]
        .into_iter()
        .flatten()
        {
            handle.abort();
        }
        tracing::info!("Portfolio closing");
    }

    // ─── VIEW ──────────────────────────────────────────────────

    pub fn view(&self) -> Element<'_, Message> {
        let p = &self.pal;
        let active = self.navigator.active();

        let tabs = Row::with_children(
            SECTIONS.iter().map(|s| menu_tab(s, active, p)),
        )
        .spacing(4);

        let toggle_accent = p.accent;
        let theme_btn = button(text(self.mode.toggle_label()).size(13).color(toggle_accent))
            .on_press(Message::ToggleTheme)
            .style(button::text)
            .padding([4, 10]);

        let header = row![
            text(content::OWNER).size(18).font(BOLD).color(p.text),
            Space::with_width(Length::Fill),
            tabs,
            Space::with_width(12),
            theme_btn,
        ]
        .align_y(Alignment::Center)
        .padding([10, 16]);

        let faded = p.faded(self.page_opacity);
        let page: Element<Message> = match active {
            SectionId::About => self.view_about(&faded),
            SectionId::Projects => self.view_projects(&faded),
            SectionId::Education => self.view_education(&faded),
            SectionId::Experience => self.view_experience(&faded),
            SectionId::Photography => self.view_photography(&faded),
            SectionId::Contact => self.view_contact(&faded),
        };
        let body = scrollable(
            container(container(page).max_width(CONTENT_MAX_WIDTH).padding([24, 16]))
                .center_x(Length::Fill),
        )
        .height(Length::Fill);

        let main = column![
            glass_bar(header.into(), p.glass, p.border),
            body,
            self.view_footer(),
        ]
        .spacing(0);

        let background: Element<Message> = match self.background.effect() {
            Some(effect) => Canvas::new(effect.scene())
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            None => {
                let bg = p.bg;
                container(Space::new(Length::Fill, Length::Fill))
                    .style(move |_: &Theme| container::Style {
                        background: Some(Background::Color(bg)),
                        ..Default::default()
                    })
                    .into()
            }
        };

        let mut layers = stack![background, main];
        if let Some(photo) = self.gallery.expanded() {
            layers = layers.push(self.view_photo_overlay(photo));
        }
        layers.width(Length::Fill).height(Length::Fill).into()
    }

    fn view_footer(&self) -> Element<'_, Message> {
        let p = &self.pal;
        // Links on the dark strip read in the footer text color.
        let fp = Palette {
            label: p.footer_text,
            link: p.footer_text,
            hover: Color { a: 0.15, ..p.footer_text },
            ..*p
        };
        let year = chrono::Local::now().format("%Y");

        let address = column![
            row![
                text("Location").size(13).color(fp.label).width(80),
                text(content::LOCATION).size(13).color(fp.footer_text),
            ],
            contact_row("Email", content::EMAIL, content::mailto(), &fp),
            contact_row("Phone", content::PHONE, content::PHONE_URI.to_string(), &fp),
        ]
        .spacing(6);
        let socials = row![
            link_button("GitHub", content::GITHUB_URL, &fp),
            link_button("LinkedIn", content::LINKEDIN_URL, &fp),
        ]
        .spacing(8);

        let notice: Element<Message> = match &self.notice {
            Some(n) => text(n.as_str()).size(12).color(fp.footer_text).into(),
            None => Space::new(0, 0).into(),
        };
        let legal = row![
            text(format!("© {year} {}. All rights reserved.", content::OWNER))
                .size(12)
                .color(fp.footer_text),
            Space::with_width(Length::Fill),
            notice,
            Space::with_width(16),
            text("← Swipe →").size(12).color(fp.footer_text),
        ]
        .align_y(Alignment::Center);

        let strip = column![
            row![address, Space::with_width(Length::Fill), socials].align_y(Alignment::Center),
            legal,
        ]
        .spacing(10)
        .padding([12, 16]);
        glass_bar(strip.into(), p.footer_bg, p.border)
    }

    // ─── ABOUT ─────────────────────────────────────────────────

    fn view_about(&self, p: &Palette) -> Element<'_, Message> {
        let headshot = container(self.asset_image(AssetId::Headshot, Length::Fixed(200.0), Length::Fixed(200.0)))
            .width(200);

        let mut bio = Column::new().spacing(12);
        for paragraph in content::BIO {
            bio = bio.push(text(*paragraph).size(15).color(p.muted));
        }

        let resume_btn = accent_button("Download My Resume", Message::DownloadResume, p);

        let links = row![
            link_button("GitHub", content::GITHUB_URL, p),
            link_button("LinkedIn", content::LINKEDIN_URL, p),
            link_button("Email", content::mailto(), p),
        ]
        .spacing(8);

        let details = column![
            section_heading("About Me", p),
            bio,
            text(content::LOCATION).size(13).color(p.label),
            resume_btn,
            links,
        ]
        .spacing(16)
        .width(Length::Fill);

        panel(row![headshot, details].spacing(24).align_y(Alignment::Start).into(), p)
    }

    // ─── PROJECTS ──────────────────────────────────────────────

    fn view_projects(&self, p: &Palette) -> Element<'_, Message> {
        let mut list = column![section_heading("Projects", p)].spacing(16);
        for project in content::PROJECTS {
            list = list.push(project_card(project, p));
        }
        list.into()
    }

    // ─── EDUCATION ─────────────────────────────────────────────

    fn view_education(&self, p: &Palette) -> Element<'_, Message> {
        let mut list = column![section_heading("Education", p)].spacing(16);
        for entry in content::EDUCATION {
            list = list.push(self.education_card(entry, p));
        }
        list.into()
    }

    fn education_card(&self, entry: &'static Education, p: &Palette) -> Element<'_, Message> {
        let logo = container(self.asset_image(
            AssetId::Logo(entry.logo),
            Length::Shrink,
            Length::Fixed(entry.logo_height),
        ))
        .width(96)
        .align_x(Alignment::Center);

        let info = column![
            text(entry.degree).size(17).font(BOLD).color(p.text),
            text(entry.institution).size(14).color(p.accent),
            row![
                text(entry.location).size(12).color(p.label),
                Space::with_width(Length::Fill),
                text(entry.period).size(12).color(p.label),
            ],
            text("Relevant Coursework").size(13).font(BOLD).color(p.text),
            text(entry.coursework.join(" · ")).size(13).color(p.muted),
        ]
        .spacing(6)
        .width(Length::Fill);

        panel(row![logo, info].spacing(16).into(), p)
    }

    // ─── EXPERIENCE ────────────────────────────────────────────

    fn view_experience(&self, p: &Palette) -> Element<'_, Message> {
        let mut list = column![section_heading("Work Experience", p)].spacing(16);
        for job in content::EXPERIENCE {
            list = list.push(experience_entry(job, p));
        }
        list.into()
    }

    // ─── PHOTOGRAPHY ───────────────────────────────────────────

    fn view_photography(&self, p: &Palette) -> Element<'_, Message> {
        let mut grid = Column::new().spacing(16);
        for chunk in self.gallery.photos().chunks(GALLERY_COLUMNS) {
            let mut line = Row::new().spacing(16);
            for photo in chunk {
                line = line.push(self.photo_card(photo, p));
            }
            for _ in chunk.len()..GALLERY_COLUMNS {
                line = line.push(Space::with_width(Length::Fill));
            }
            grid = grid.push(line);
        }
        column![section_heading("Photography", p), grid].spacing(16).into()
    }

    fn photo_card(&self, photo: &Photo, p: &Palette) -> Element<'_, Message> {
        let thumb = button(self.asset_image(photo.asset, Length::Fill, Length::Fixed(200.0)))
            .on_press(Message::ExpandPhoto(photo.id))
            .padding(0)
            .style(button::text);

        let caption = row![
            text(photo.title).size(13).color(p.text).width(Length::Fill),
            like_button(photo, p),
        ]
        .spacing(6)
        .align_y(Alignment::Center);

        container(panel(column![thumb, caption].spacing(8).into(), p))
            .width(Length::Fill)
            .into()
    }

    fn view_photo_overlay(&self, photo: &Photo) -> Element<'_, Message> {
        let p = &self.pal;
        let close_c = p.text;
        let bar = row![
            text(photo.title).size(16).font(BOLD).color(p.text).width(Length::Fill),
            like_button(photo, p),
            button(text("✕").size(16).color(close_c))
                .on_press(Message::ClosePhoto)
                .style(button::text)
                .padding([2, 8]),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        let card = column![bar, self.asset_image(photo.asset, Length::Fill, Length::Shrink)].spacing(10);
        // Presses on the card must not reach the backdrop.
        let inner = mouse_area(panel(card.into(), p)).on_press(Message::OverlayContentPressed);

        let dim = Color::from_rgba(0.0, 0.0, 0.0, 0.8);
        let backdrop = container(container(inner).max_width(CONTENT_MAX_WIDTH))
            .center(Length::Fill)
            .padding(32)
            .style(move |_: &Theme| container::Style {
                background: Some(Background::Color(dim)),
                ..Default::default()
            });
        opaque(mouse_area(backdrop).on_press(Message::ClosePhoto))
    }

    // ─── CONTACT ───────────────────────────────────────────────

    fn view_contact(&self, p: &Palette) -> Element<'_, Message> {
        let info = column![
            text("Contact Information").size(17).font(BOLD).color(p.text),
            contact_row("Email", content::EMAIL, content::mailto(), p),
            contact_row("Phone", content::PHONE, content::PHONE_URI.to_string(), p),
            row![
                text("Location").size(13).color(p.label).width(80),
                text(content::LOCATION).size(13).color(p.muted),
            ],
            Space::with_height(8),
            text("Connect with me").size(17).font(BOLD).color(p.text),
            row![
                link_button("GitHub", content::GITHUB_URL, p),
                link_button("LinkedIn", content::LINKEDIN_URL, p),
            ]
            .spacing(8),
        ]
        .spacing(10)
        .width(Length::FillPortion(2));

        column![
            section_heading("Contact Me", p),
            row![panel(info.into(), p), self.contact_form(p)].spacing(16),
        ]
        .spacing(16)
        .into()
    }

    fn contact_form(&self, p: &Palette) -> Element<'_, Message> {
        let status = self.contact.status();
        let submit_label = if status == SubmissionStatus::Submitting {
            "Sending..."
        } else {
            "Send Message"
        };
        let submit = accent_button_maybe(
            submit_label,
            (status == SubmissionStatus::Idle).then_some(Message::SubmitContact),
            p,
        );

        let banner: Element<Message> = match status.banner() {
            Some(msg) => {
                let c = if status == SubmissionStatus::Success { p.success } else { p.error };
                text(msg).size(13).color(c).into()
            }
            None => match self.contact.rejection() {
                Some(why) => text(why.to_string()).size(13).color(p.error).into(),
                None => Space::new(0, 0).into(),
            },
        };

        let (field_bg, field_edge, focus) = (p.input_bg, p.input_border, p.accent);
        let (value_c, hint_c) = (p.text, p.label);
        let selection = Color { a: 0.3, ..p.accent };
        let edge = move |focused: bool| Border {
            color: if focused { focus } else { field_edge },
            width: 1.0,
            radius: 6.0.into(),
        };
        let input_style = move |_: &Theme, status: text_input::Status| text_input::Style {
            background: Background::Color(field_bg),
            border: edge(matches!(status, text_input::Status::Focused)),
            icon: hint_c,
            placeholder: hint_c,
            value: value_c,
            selection,
        };
        let editor_style = move |_: &Theme, status: text_editor::Status| text_editor::Style {
            background: Background::Color(field_bg),
            border: edge(matches!(status, text_editor::Status::Focused)),
            icon: hint_c,
            placeholder: hint_c,
            value: value_c,
            selection,
        };

        let form = column![
            text("Send me a message").size(17).font(BOLD).color(p.text),
            form_label("Name", p),
            text_input("Your name", &self.contact.name)
                .on_input(|v| Message::ContactField(Field::Name, v))
                .padding(10)
                .style(input_style),
            form_label("Email", p),
            text_input("you@example.com", &self.contact.email)
                .on_input(|v| Message::ContactField(Field::Email, v))
                .padding(10)
                .style(input_style),
            form_label("Message", p),
            text_editor(&self.message_editor)
                .placeholder("Your message")
                .on_action(Message::MessageEdited)
                .height(Length::Fixed(150.0))
                .padding(10)
                .style(editor_style),
            submit,
            banner,
        ]
        .spacing(8);

        container(panel(form.into(), p)).width(Length::FillPortion(3)).into()
    }

    // ─── MEDIA ─────────────────────────────────────────────────

    /// The loaded image, or the placeholder while loading and after a failure.
    fn asset_image(&self, id: AssetId, width: Length, height: Length) -> Element<'_, Message> {
        let slot = self.images.get(&id).unwrap_or(&ImageSlot::Loading);
        let handle = match slot {
            ImageSlot::Ready(h) => h.clone(),
            ImageSlot::Loading | ImageSlot::Failed => self.placeholder.clone(),
        };
        let img = image(handle).width(width).height(height).content_fit(ContentFit::Cover);

        match (slot, id) {
            (ImageSlot::Failed, AssetId::Photo(_)) => {
                let label_c = Color::from_rgb(0.35, 0.35, 0.35);
                stack![
                    img,
                    container(text("Photo Not Available").size(13).color(label_c))
                        .center(Length::Fill),
                ]
                .into()
            }
            _ => img.into(),
        }
    }
}

/// Run `on_elapsed` after `duration`, abortable through the returned handle.
fn delay(duration: Duration, on_elapsed: Message) -> (Task<Message>, task::Handle) {
    let (task, handle) = Task::perform(
        async move { tokio::time::sleep(duration).await },
        move |()| on_elapsed.clone(),
    )
    .abortable();
    (task, handle.abort_on_drop())
}

// ─── CARDS ──────────────────────────────────────────────────────

fn project_card(project: &'static Project, p: &Palette) -> Element<'static, Message> {
    let mut body = column![
        text(project.title).size(18).font(BOLD).color(p.text),
        text(project.description).size(14).color(p.muted),
        Row::with_children(project.technologies.iter().map(|t| chip(t, p))).spacing(6),
    ]
    .spacing(10);

    if let Some(award) = project.award {
        body = body.push(badge(award, p.award_bg, p.award_text));
    }

    let mut features = Column::new().spacing(4);
    for feature in project.features {
        features = features.push(text(format!("• {feature}")).size(13).color(p.muted));
    }
    body = body.push(text("Key Features").size(13).font(BOLD).color(p.text)).push(features);

    if let Some(plan) = project.test_plan {
        body = body.push(text(plan).size(12).color(p.label));
    }

    let mut links = Row::new().spacing(8);
    if let Some(url) = project.github_url {
        links = links.push(link_button("GitHub", url, p));
    }
    if let Some(url) = project.live_demo_url {
        links = links.push(link_button("Live Demo", url, p));
    }
    panel(body.push(links).into(), p)
}

fn experience_entry(job: &'static Experience, p: &Palette) -> Element<'static, Message> {
    let line_c = p.timeline;
    let accent = p.accent;
    let rail = column![
        container(Space::new(12, 12)).style(move |_: &Theme| container::Style {
            background: Some(Background::Color(accent)),
            border: Border { radius: 6.0.into(), ..Default::default() },
            ..Default::default()
        }),
        container(Space::new(2, Length::Fill)).style(move |_: &Theme| container::Style {
            background: Some(Background::Color(line_c)),
            ..Default::default()
        }),
    ]
    .align_x(Alignment::Center)
    .width(16)
    .height(Length::Fill);

    let mut achievements = Column::new().spacing(4);
    for item in job.achievements {
        achievements = achievements.push(text(format!("• {item}")).size(13).color(p.muted));
    }

    let card = column![
        text(job.role).size(18).font(BOLD).color(p.text),
        text(job.company).size(14).color(p.accent),
        row![
            text(job.location).size(12).color(p.label),
            Space::with_width(Length::Fill),
            text(job.period).size(12).color(p.label),
        ],
        text(job.description).size(14).color(p.text),
        achievements,
        Row::with_children(job.skills.iter().map(|s| chip(s, p))).spacing(6),
    ]
    .spacing(8);

    row![rail, panel(card.into(), p)]
        .spacing(12)
        .height(Length::Shrink)
        .into()
}

fn contact_row(label: &'static str, value: &'static str, target: String, p: &Palette) -> Element<'static, Message> {
    let label_c = p.label;
    let link_c = p.link;
    row![
        text(label).size(13).color(label_c).width(80),
        button(text(value).size(13).color(link_c))
            .on_press(Message::CopyLink(target))
            .style(button::text)
            .padding(0),
    ]
    .align_y(Alignment::Center)
    .into()
}

// ─── SMALL WIDGETS ──────────────────────────────────────────────

fn like_button(photo: &Photo, p: &Palette) -> Element<'static, Message> {
    let (glyph, color) = if photo.liked { ("♥", p.like) } else { ("♡", p.muted) };
    button(text(glyph).size(18).color(color))
        .on_press(Message::ToggleLike(photo.id))
        .style(button::text)
        .padding([0, 4])
        .into()
}

fn chip(label: &'static str, p: &Palette) -> Element<'static, Message> {
    badge(label, p.chip_bg, p.chip_text)
}

fn badge(label: &'static str, bg: Color, fg: Color) -> Element<'static, Message> {
    container(text(label).size(12).color(fg))
        .padding([2, 8])
        .style(move |_: &Theme| container::Style {
            background: Some(Background::Color(bg)),
            border: Border { radius: 10.0.into(), ..Default::default() },
            ..Default::default()
        })
        .into()
}

fn link_button(label: &'static str, target: impl Into<String>, p: &Palette) -> Element<'static, Message> {
    let link = p.link;
    let hover = p.hover;
    button(text(label).size(13).color(link))
        .on_press(Message::CopyLink(target.into()))
        .padding([4, 10])
        .style(move |_: &Theme, status| {
            let bg = match status {
                button::Status::Hovered | button::Status::Pressed => hover,
                _ => Color::TRANSPARENT,
            };
            button::Style {
                background: Some(Background::Color(bg)),
                text_color: link,
                border: Border { color: link, width: 1.0, radius: 6.0.into() },
                ..Default::default()
            }
        })
        .into()
}

fn accent_button(label: &'static str, on_press: Message, p: &Palette) -> Element<'static, Message> {
    accent_button_maybe(label, Some(on_press), p)
}

fn accent_button_maybe(label: &'static str, on_press: Option<Message>, p: &Palette) -> Element<'static, Message> {
    let accent = p.accent;
    let strong = p.accent_strong;
    let white = Color::WHITE;
    button(text(label).size(14).color(white))
        .on_press_maybe(on_press)
        .padding([8, 18])
        .style(move |_: &Theme, status| {
            let bg = match status {
                button::Status::Hovered | button::Status::Pressed => strong,
                button::Status::Disabled => Color { a: accent.a * 0.5, ..accent },
                button::Status::Active => accent,
            };
            button::Style {
                background: Some(Background::Color(bg)),
                text_color: white,
                border: Border { radius: 6.0.into(), ..Default::default() },
                ..Default::default()
            }
        })
        .into()
}

fn form_label(label: &'static str, p: &Palette) -> Element<'static, Message> {
    text(label).size(13).color(p.label).into()
}

fn panel<'a>(content: Element<'a, Message>, p: &Palette) -> Element<'a, Message> {
    let card_bg = p.card_bg;
    let border_c = p.border;
    container(content)
        .width(Length::Fill)
        .padding(16)
        .style(move |_: &Theme| container::Style {
            background: Some(Background::Color(card_bg)),
            border: Border {
                color: border_c,
                width: 1.0,
                radius: 8.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
                offset: Vector::new(0.0, 2.0),
                blur_radius: 8.0,
            },
            ..Default::default()
        })
        .into()
}

/// Full-width translucent strip (header and footer) over the background.
fn glass_bar<'a>(content: Element<'a, Message>, fill: Color, edge: Color) -> Element<'a, Message> {
    container(content)
        .width(Length::Fill)
        .style(move |_: &Theme| container::Style {
            background: Some(Background::Color(fill)),
            shadow: Shadow {
                color: Color { a: 0.5, ..edge },
                offset: Vector::new(0.0, 1.0),
                blur_radius: 3.0,
            },
            ..Default::default()
        })
        .into()
}

/// Menu entry: a filled accent pill when active, a muted label otherwise.
fn menu_tab(section: &'static Section, current: SectionId, p: &Palette) -> Element<'static, Message> {
    let is_active = section.id == current;
    let (pill, pill_hover) = (p.accent, p.accent_strong);
    let idle_text = p.label;
    let hover = p.hover;
    let label_c = if is_active { Color::WHITE } else { idle_text };
    button(text(section.label).size(13).color(label_c))
        .on_press(Message::SectionSelected(section.key))
        .padding([6, 14])
        .style(move |_: &Theme, status| {
            let fill = match (is_active, status) {
                (true, button::Status::Hovered | button::Status::Pressed) => pill_hover,
                (true, _) => pill,
                (false, button::Status::Hovered | button::Status::Pressed) => hover,
                (false, _) => Color::TRANSPARENT,
            };
            button::Style {
                background: Some(Background::Color(fill)),
                text_color: label_c,
                border: Border { radius: 16.0.into(), ..Default::default() },
                ..Default::default()
            }
        })
        .into()
}

fn section_heading(label: &'static str, p: &Palette) -> Element<'static, Message> {
    text(label).size(28).font(BOLD).color(p.text).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use iced::Point;

    struct NullRelay;

    #[async_trait]
    impl EmailRelay for NullRelay {
        async fn send(&self, _request: RelayRequest) -> Result<(), RelayError> {
            Ok(())
        }
    }

    fn app() -> Portfolio {
        Portfolio::with_relay(Settings::default(), Arc::new(NullRelay)).0
    }

    fn key(named: keyboard::key::Named) -> Message {
        Message::KeyPressed(keyboard::Key::Named(named), keyboard::Modifiers::default())
    }

    fn finger(n: u64) -> touch::Finger {
        touch::Finger(n)
    }

    fn swipe(app: &mut Portfolio, from: Point, to: Point) {
        let _ = app.update(Message::Touch(touch::Event::FingerPressed { id: finger(0), position: from }));
        let _ = app.update(Message::Touch(touch::Event::FingerMoved { id: finger(0), position: to }));
        let _ = app.update(Message::Touch(touch::Event::FingerLifted { id: finger(0), position: to }));
    }

    #[test]
    fn test_starts_on_about_in_light_mode() {
        let app = app();
        assert_eq!(app.navigator.active(), SectionId::About);
        assert_eq!(app.mode, ThemeMode::Light);
        assert!(app.images.values().all(|s| matches!(s, ImageSlot::Loading)));
    }

    #[test]
    fn test_arrow_keys_navigate() {
        let mut app = app();
        let _ = app.update(key(keyboard::key::Named::ArrowRight));
        assert_eq!(app.navigator.active(), SectionId::Projects);
        assert_eq!(app.page_opacity, 0.0);
        let _ = app.update(key(keyboard::key::Named::ArrowLeft));
        let _ = app.update(key(keyboard::key::Named::ArrowLeft));
        assert_eq!(app.navigator.active(), SectionId::About);
    }

    #[test]
    fn test_swipe_left_advances() {
        let mut app = app();
        swipe(&mut app, Point::new(100.0, 100.0), Point::new(40.0, 102.0));
        assert_eq!(app.navigator.active(), SectionId::Projects);
        assert!(app.active_finger.is_none());
    }

    #[test]
    fn test_vertical_drag_does_not_navigate() {
        let mut app = app();
        swipe(&mut app, Point::new(100.0, 100.0), Point::new(100.0, 130.0));
        assert_eq!(app.navigator.active(), SectionId::About);
    }

    #[test]
    fn test_second_finger_is_ignored() {
        let mut app = app();
        let start = Point::new(100.0, 100.0);
        let end = Point::new(40.0, 102.0);
        let _ = app.update(Message::Touch(touch::Event::FingerPressed { id: finger(0), position: start }));
        let _ = app.update(Message::Touch(touch::Event::FingerPressed { id: finger(1), position: end }));
        let _ = app.update(Message::Touch(touch::Event::FingerMoved { id: finger(1), position: start }));
        let _ = app.update(Message::Touch(touch::Event::FingerLifted { id: finger(1), position: start }));
        assert_eq!(app.navigator.active(), SectionId::About);
        assert_eq!(app.active_finger, Some(finger(0)));
    }

    #[test]
    fn test_lost_finger_cancels_swipe() {
        let mut app = app();
        let start = Point::new(100.0, 100.0);
        let end = Point::new(40.0, 102.0);
        let _ = app.update(Message::Touch(touch::Event::FingerPressed { id: finger(0), position: start }));
        let _ = app.update(Message::Touch(touch::Event::FingerMoved { id: finger(0), position: end }));
        let _ = app.update(Message::Touch(touch::Event::FingerLost { id: finger(0), position: end }));
        assert!(!app.swipe.is_active());
        assert_eq!(app.navigator.active(), SectionId::About);
    }

    #[test]
    fn test_theme_toggle_reconfigures_live_effect() {
        let mut app = app();
        let token = app.background.mount().unwrap();
        let _ = app.update(Message::EffectInitElapsed(token));
        assert!(app.background.effect().is_some());

        let _ = app.update(Message::ToggleTheme);
        assert_eq!(app.mode, ThemeMode::Dark);
        assert_eq!(
            app.background.effect().unwrap().options(),
            &EffectOptions::for_theme(ThemeMode::Dark)
        );
        assert_eq!(app.pal.bg, Palette::for_mode(ThemeMode::Dark).bg);
    }

    #[test]
    fn test_effect_created_with_current_theme() {
        let mut app = app();
        let token = app.background.mount().unwrap();
        let _ = app.update(Message::ToggleTheme);
        let _ = app.update(Message::EffectInitElapsed(token));
        assert_eq!(
            app.background.effect().unwrap().options(),
            &EffectOptions::for_theme(ThemeMode::Dark)
        );
    }

    #[test]
    fn test_close_tears_down_once() {
        let mut app = app();
        let token = app.background.mount().unwrap();
        let _ = app.update(Message::EffectInitElapsed(token));
        let _ = app.update(Message::CloseRequested(window::Id::unique()));
        assert!(app.background.is_torn_down());
        assert!(app.background.effect().is_none());
        assert!(app.effect_init_task.is_none());
        // A second close request is harmless.
        let _ = app.update(Message::CloseRequested(window::Id::unique()));
        assert!(app.closing);
    }

    #[test]
    fn test_overlay_escape_and_section_change() {
        let mut app = app();
        let _ = app.update(Message::SectionSelected("photography"));
        let _ = app.update(Message::ExpandPhoto(2));
        let _ = app.update(Message::OverlayContentPressed);
        assert_eq!(app.gallery.expanded().map(|p| p.id), Some(2));
        let _ = app.update(key(keyboard::key::Named::Escape));
        assert!(app.gallery.expanded().is_none());

        let _ = app.update(Message::ExpandPhoto(2));
        let _ = app.update(key(keyboard::key::Named::ArrowRight));
        assert_eq!(app.navigator.active(), SectionId::Contact);
        assert!(app.gallery.expanded().is_none());
    }

    #[test]
    fn test_like_from_overlay() {
        let mut app = app();
        let _ = app.update(Message::ExpandPhoto(3));
        let _ = app.update(Message::ToggleLike(3));
        assert!(!app.gallery.expanded().unwrap().liked);
        assert!(!app.gallery.photo(3).unwrap().liked);
    }

    #[test]
    fn test_failed_image_falls_back() {
        let mut app = app();
        let err = AssetError::Decode { path: PathBuf::from("photos/1.jpg"), reason: "bad".into() };
        let _ = app.update(Message::ImageLoaded(AssetId::Photo(1), Err(err)));
        assert!(matches!(app.images[&AssetId::Photo(1)], ImageSlot::Failed));
        assert!(matches!(app.images[&AssetId::Photo(2)], ImageSlot::Loading));
    }

    #[test]
    fn test_contact_round_trip() {
        let mut app = app();
        let _ = app.update(Message::ContactField(Field::Name, "Ada".into()));
        let _ = app.update(Message::ContactField(Field::Email, "ada@example.com".into()));
        let _ = app.update(Message::ContactField(Field::Message, "Hello".into()));

        let _ = app.update(Message::SubmitContact);
        assert_eq!(app.contact.status(), SubmissionStatus::Submitting);
        // A second press while in flight is refused.
        let _ = app.update(Message::SubmitContact);
        assert_eq!(app.contact.status(), SubmissionStatus::Submitting);

        let _ = app.update(Message::SubmissionFinished(Ok(())));
        assert_eq!(app.contact.status(), SubmissionStatus::Success);
        assert!(app.contact.name.is_empty());
        assert!(app.status_reset_task.is_some());
    }

    #[test]
    fn test_contact_failure_keeps_buffer() {
        let mut app = app();
        let _ = app.update(Message::ContactField(Field::Name, "Ada".into()));
        let _ = app.update(Message::ContactField(Field::Email, "ada@example.com".into()));
        let _ = app.update(Message::ContactField(Field::Message, "Hello".into()));
        let _ = app.update(Message::SubmitContact);
        let _ = app.update(Message::SubmissionFinished(Err(RelayError::Transport("offline".into()))));
        assert_eq!(app.contact.status(), SubmissionStatus::Error);
        assert_eq!(app.contact.name, "Ada");
    }

    #[test]
    fn test_copied_link_notice_holds_its_timer() {
        let mut app = app();
        let _ = app.update(Message::CopyLink(content::PHONE_URI.to_string()));
        assert_eq!(app.notice.as_deref(), Some(format!("Copied {}", content::PHONE_URI).as_str()));
        assert!(app.notice_task.is_some());

        let _ = app.update(Message::CloseRequested(window::Id::unique()));
        assert!(app.notice_task.is_none());
    }

    #[test]
    fn test_every_section_renders_in_both_modes() {
        let mut app = app();
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            if app.mode != mode {
                let _ = app.update(Message::ToggleTheme);
            }
            for section in SECTIONS {
                let _ = app.update(Message::SectionSelected(section.key));
                assert_eq!(app.navigator.active(), section.id);
                let _ = app.view();
            }
        }
        let _ = app.update(Message::ExpandPhoto(1));
        let _ = app.view();
    }

    #[test]
    fn test_fade_in_completes() {
        let mut app = app();
        let _ = app.update(Message::SectionSelected("education"));
        for _ in 0..20 {
            let _ = app.update(Message::AnimTick);
        }
        assert_eq!(app.page_opacity, 1.0);
    }
}
