use iced::mouse;
use iced::touch;
use iced::widget::canvas::{self, Event, Frame, Geometry, Path, Stroke};
use iced::{Color, Point, Rectangle, Renderer, Theme, Vector};

use crate::error::EffectError;
use crate::theme::{color_from_u32, ThemeMode};
use crate::timer::{TimerSlot, TimerToken};

// ─── OPTIONS ────────────────────────────────────────────────────

/// Full configuration of the animated net background.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectOptions {
    /// 0xRRGGBB of nodes and links.
    pub color: u32,
    /// 0xRRGGBB behind the net.
    pub background_color: u32,
    /// Nodes per grid side.
    pub points: u32,
    /// Links are drawn between nodes closer than this (grid units).
    pub max_distance: f32,
    /// Distance between neighbouring grid nodes (grid units).
    pub spacing: f32,
    pub mouse_controls: bool,
    pub touch_controls: bool,
}

/// A live update. Unset fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EffectPatch {
    pub color: Option<u32>,
    pub background_color: Option<u32>,
    pub points: Option<u32>,
    pub max_distance: Option<f32>,
    pub spacing: Option<f32>,
}

const MAX_POINTS: u32 = 40;

impl EffectOptions {
    pub fn for_theme(mode: ThemeMode) -> Self {
        let (color, background_color, points, max_distance, spacing) = theme_constants(mode);
        Self {
            color,
            background_color,
            points,
            max_distance,
            spacing,
            mouse_controls: true,
            touch_controls: true,
        }
    }

    pub fn apply(&mut self, patch: &EffectPatch) {
        if let Some(c) = patch.color { self.color = c; }
        if let Some(c) = patch.background_color { self.background_color = c; }
        if let Some(p) = patch.points { self.points = p; }
        if let Some(d) = patch.max_distance { self.max_distance = d; }
        if let Some(s) = patch.spacing { self.spacing = s; }
    }

    pub fn validate(&self) -> Result<(), EffectError> {
        if !(2..=MAX_POINTS).contains(&self.points) {
            return Err(EffectError::InvalidOptions(format!(
                "points must be within 2..={MAX_POINTS}, got {}",
                self.points
            )));
        }
        if !(self.spacing.is_finite() && self.spacing > 0.0) {
            return Err(EffectError::InvalidOptions(format!("spacing must be positive, got {}", self.spacing)));
        }
        if !(self.max_distance.is_finite() && self.max_distance > 0.0) {
            return Err(EffectError::InvalidOptions(format!(
                "max_distance must be positive, got {}",
                self.max_distance
            )));
        }
        Ok(())
    }
}

impl EffectPatch {
    /// Every theme-dependent field, so a patched instance is never half one theme.
    pub fn for_theme(mode: ThemeMode) -> Self {
        let (color, background_color, points, max_distance, spacing) = theme_constants(mode);
        Self {
            color: Some(color),
            background_color: Some(background_color),
            points: Some(points),
            max_distance: Some(max_distance),
            spacing: Some(spacing),
        }
    }
}

/// (color, background, points, max_distance, spacing)
fn theme_constants(mode: ThemeMode) -> (u32, u32, u32, f32, f32) {
    match mode {
        ThemeMode::Light => (0x3a0ca3, 0xf3f4f6, 10, 20.0, 16.0),
        ThemeMode::Dark => (0x3a86ff, 0x111827, 12, 22.0, 18.0),
    }
}

// ─── ADAPTER ────────────────────────────────────────────────────

/// A live background effect instance.
pub trait EffectHandle {
    /// Apply a live update. May fail; the caller decides how to recover.
    fn reconfigure(&mut self, patch: &EffectPatch) -> Result<(), EffectError>;
    /// Release the instance. Further reconfiguration fails.
    fn dispose(&mut self);
}

/// Owns the background effect for the lifetime of the window.
///
/// The effect is created lazily once the init timer elapses, re-themed in
/// place when possible and recreated from scratch when not, and disposed
/// exactly once on teardown.
pub struct BackgroundCoordinator<H, F> {
    factory: F,
    effect: Option<H>,
    init_timer: TimerSlot,
    torn_down: bool,
}

impl<H, F> BackgroundCoordinator<H, F>
where
    H: EffectHandle,
    F: Fn(EffectOptions) -> Result<H, EffectError>,
{
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            effect: None,
            init_timer: TimerSlot::default(),
            torn_down: false,
        }
    }

    pub fn effect(&self) -> Option<&H> {
        self.effect.as_ref()
    }

    pub fn effect_mut(&mut self) -> Option<&mut H> {
        self.effect.as_mut()
    }

    #[cfg(test)]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Arm the delayed creation. `None` if nothing needs creating.
    pub fn mount(&mut self) -> Option<TimerToken> {
        if self.torn_down || self.effect.is_some() {
            return None;
        }
        Some(self.init_timer.arm())
    }

    /// Create the effect for `mode` if `token` is the live init timer.
    pub fn on_init_elapsed(&mut self, token: TimerToken, mode: ThemeMode) -> bool {
        if !self.init_timer.fire(token) || self.torn_down || self.effect.is_some() {
            return false;
        }
        self.effect = self.create(mode);
        self.effect.is_some()
    }

    pub fn apply_theme(&mut self, mode: ThemeMode) {
        let Some(effect) = self.effect.as_mut() else {
            // Not created yet; creation reads the current theme.
            return;
        };
        if let Err(e) = effect.reconfigure(&EffectPatch::for_theme(mode)) {
            tracing::error!("Failed to update background effect: {e}");
            effect.dispose();
            self.effect = self.create(mode);
        }
    }

    /// Cancel the pending init and dispose the effect. Idempotent.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.init_timer.cancel();
        if let Some(mut effect) = self.effect.take() {
            effect.dispose();
        }
    }

    fn create(&self, mode: ThemeMode) -> Option<H> {
        match (self.factory)(EffectOptions::for_theme(mode)) {
            Ok(effect) => {
                tracing::debug!("Background effect created ({mode:?})");
                Some(effect)
            }
            Err(e) => {
                tracing::error!("Failed to create background effect: {e}");
                None
            }
        }
    }
}

// ─── NET EFFECT ─────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
struct Node {
    /// Rest position in grid units, centred on the origin.
    base: Vector,
    freq: f32,
    offset: f32,
}

/// A drifting grid of nodes linked by proximity, drawn on a Canvas.
#[derive(Debug, Clone)]
pub struct NetEffect {
    options: EffectOptions,
    nodes: Vec<Node>,
    phase: f32,
    disposed: bool,
}

impl NetEffect {
    pub fn new(options: EffectOptions) -> Result<Self, EffectError> {
        options.validate()?;
        Ok(Self {
            nodes: build_nodes(&options),
            options,
            phase: 0.0,
            disposed: false,
        })
    }

    #[cfg(test)]
    pub fn options(&self) -> &EffectOptions {
        &self.options
    }

    #[cfg(test)]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Step the animation by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        if self.disposed {
            return;
        }
        self.phase += dt;
        if self.phase > 3600.0 {
            self.phase -= 3600.0;
        }
    }

    /// Snapshot for one frame.
    pub fn scene(&self) -> NetScene {
        let amp = self.options.spacing * 0.35;
        let positions = self
            .nodes
            .iter()
            .map(|n| {
                let t = self.phase * n.freq + n.offset;
                Point::new(n.base.x + t.sin() * amp, n.base.y + (t * 0.8).cos() * amp)
            })
            .collect();
        NetScene {
            positions,
            options: self.options.clone(),
        }
    }
}

impl EffectHandle for NetEffect {
    fn reconfigure(&mut self, patch: &EffectPatch) -> Result<(), EffectError> {
        if self.disposed {
            return Err(EffectError::Disposed);
        }
        let mut next = self.options.clone();
        next.apply(patch);
        next.validate()?;
        if next.points != self.options.points || next.spacing != self.options.spacing {
            self.nodes = build_nodes(&next);
        }
        self.options = next;
        Ok(())
    }

    fn dispose(&mut self) {
        self.disposed = true;
        self.nodes.clear();
    }
}

fn build_nodes(options: &EffectOptions) -> Vec<Node> {
    let n = options.points as usize;
    let half = (n - 1) as f32 / 2.0;
    let mut nodes = Vec::with_capacity(n * n);
    for row in 0..n {
        for col in 0..n {
            let i = (row * n + col) as f32;
            nodes.push(Node {
                base: Vector::new(
                    (col as f32 - half) * options.spacing,
                    (row as f32 - half) * options.spacing,
                ),
                freq: 0.25 + 0.35 * pseudo_random(i),
                offset: std::f32::consts::TAU * pseudo_random(i + 17.0),
            });
        }
    }
    nodes
}

/// Deterministic value in [0, 1) for a seed.
fn pseudo_random(seed: f32) -> f32 {
    let v = (seed * 12.9898).sin() * 43758.547;
    v - v.floor()
}

/// Pointer position for mouse/touch parallax.
#[derive(Debug, Clone, Default)]
pub struct NetState {
    touch: Option<Point>,
}

/// One frame of the net, ready to draw.
#[derive(Debug, Clone)]
pub struct NetScene {
    positions: Vec<Point>,
    options: EffectOptions,
}

const PARALLAX: f32 = 0.04;

impl<Message: 'static> canvas::Program<Message> for NetScene {
    type State = NetState;

    fn update(
        &self,
        state: &mut Self::State,
        event: Event,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        if !self.options.touch_controls {
            return (canvas::event::Status::Ignored, None);
        }
        match event {
            Event::Touch(touch::Event::FingerPressed { position, .. })
            | Event::Touch(touch::Event::FingerMoved { position, .. }) => {
                state.touch = Some(Point::new(position.x - bounds.x, position.y - bounds.y));
            }
            Event::Touch(touch::Event::FingerLifted { .. })
            | Event::Touch(touch::Event::FingerLost { .. }) => {
                state.touch = None;
            }
            _ => {}
        }
        // Never consume input; the content above must still scroll and swipe.
        (canvas::event::Status::Ignored, None)
    }

    fn draw(
        &self,
        state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let o = &self.options;

        let bg = Path::rectangle(Point::ORIGIN, bounds.size());
        frame.fill(&bg, color_from_u32(o.background_color));

        let n = o.points.max(2) as f32;
        let extent = (n - 1.0) * o.spacing;
        if extent <= 0.0 || bounds.width <= 0.0 || bounds.height <= 0.0 {
            return vec![frame.into_geometry()];
        }
        // Overshoot the edges slightly so the net fills the window while drifting.
        let scale = bounds.width.max(bounds.height) / extent * 1.1;
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);

        let pointer = state.touch.or_else(|| {
            if o.mouse_controls { cursor.position_in(bounds) } else { None }
        });
        let shift = pointer
            .map(|p| Vector::new((p.x - center.x) * PARALLAX, (p.y - center.y) * PARALLAX))
            .unwrap_or(Vector::new(0.0, 0.0));

        let to_screen = |p: &Point| {
            Point::new(center.x + p.x * scale + shift.x, center.y + p.y * scale + shift.y)
        };

        let base = color_from_u32(o.color);

        // Links, fading with distance
        for (i, a) in self.positions.iter().enumerate() {
            for b in &self.positions[i + 1..] {
                let d = a.distance(*b);
                if d >= o.max_distance {
                    continue;
                }
                let strength = 1.0 - d / o.max_distance;
                let link = Path::line(to_screen(a), to_screen(b));
                frame.stroke(
                    &link,
                    Stroke::default()
                        .with_color(Color::from_rgba(base.r, base.g, base.b, 0.15 + 0.45 * strength))
                        .with_width(1.0),
                );
            }
        }

        // Nodes
        for p in &self.positions {
            let dot = Path::circle(to_screen(p), 2.5);
            frame.fill(&dot, base);
        }

        vec![frame.into_geometry()]
    }
}
