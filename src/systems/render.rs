//! Drawing.
//!
//! [`render_system`] draws one frame into the fixed-size [`RenderTarget`] and
//! then scales that texture into the window. Inside the target, layers go
//! bottom to top:
//!
//! 1. background colour from [`CameraFx`]
//! 2. world entities (shapes, sprites, text) sorted by [`ZIndex`], shifted by
//!    the camera shake
//! 3. the cave [`Darkness`] overlay
//! 4. HUD: hearts, mission title, boss bar
//! 5. touch buttons (gameplay scenes only)
//! 6. dialogue box
//! 7. flash and fade overlays
//! 8. collider boxes when [`DebugMode`] is on
//!
//! Text goes through raylib's `DrawTextEx` with the main font, or raylib's
//! built-in font when the main font could not be loaded.

use std::ffi::CString;

use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemParam;
use raylib::ffi;
use raylib::prelude::*;

use crate::components::bob::Bob;
use crate::components::boxcollider::BoxCollider;
use crate::components::darkness::Darkness;
use crate::components::dynamictext::DynamicText;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::shape::{BossLook, EnemyLook, NpcLook, Shape, flower_petals, heart_color, heart_geometry};
use crate::components::sprite::Sprite;
use crate::components::tint::{Tint, rgb, rgba, with_alpha};
use crate::components::zindex::ZIndex;
use crate::resources::camerafx::CameraFx;
use crate::resources::debugmode::DebugMode;
use crate::resources::dialogue::{DialogueManager, wrap_text};
use crate::resources::fontstore::{FontStore, MAIN_FONT};
use crate::resources::hud::{HEART_SIZE, HEART_SPACING, HEART_X, HEART_Y, HeartState, Hud, boss_bar_color};
use crate::resources::rendertarget::RenderTarget;
use crate::resources::scene::SceneManager;
use crate::resources::texturestore::TextureStore;
use crate::resources::touch::TouchControls;
use crate::resources::windowsize::WindowSize;
use crate::resources::worldtime::WorldTime;

const SPACING: f32 = 1.0;

const DIALOGUE_BOX: Rectangle = Rectangle {
    x: 40.0,
    y: 440.0,
    width: 720.0,
    height: 130.0,
};
const DIALOGUE_FONT: f32 = 10.0;
const DIALOGUE_LINE: f32 = 18.0;

/// Read-only state the overlays are drawn from.
#[derive(SystemParam)]
pub struct Overlays<'w> {
    pub camera: Res<'w, CameraFx>,
    pub hud: Res<'w, Hud>,
    pub dialogue: Res<'w, DialogueManager>,
    pub touch: Res<'w, TouchControls>,
    pub scenes: Res<'w, SceneManager>,
    pub window: Res<'w, WindowSize>,
    pub time: Res<'w, WorldTime>,
    pub debug: Option<Res<'w, DebugMode>>,
}

type Drawable = (
    &'static MapPosition,
    Option<&'static ZIndex>,
    Option<&'static Shape>,
    Option<&'static Sprite>,
    Option<&'static DynamicText>,
    Option<&'static Tint>,
    Option<&'static Scale>,
    Option<&'static Rotation>,
    Option<&'static Bob>,
);

#[allow(clippy::too_many_arguments)]
pub fn render_system(
    mut rl: NonSendMut<RaylibHandle>,
    th: NonSend<RaylibThread>,
    mut target: NonSendMut<RenderTarget>,
    fonts: NonSend<FontStore>,
    textures: Res<TextureStore>,
    overlays: Overlays,
    drawables: Query<Drawable, Or<(With<Shape>, With<Sprite>, With<DynamicText>)>>,
    colliders: Query<(&MapPosition, &BoxCollider)>,
    darkness: Query<&Darkness>,
    players: Query<&MapPosition, With<Player>>,
    entities: Query<Entity>,
) {
    let font = fonts
        .get(MAIN_FONT)
        .map(|f| **f)
        .unwrap_or_else(|| unsafe { ffi::GetFontDefault() });
    let view_w = target.game_width as f32;
    let view_h = target.game_height as f32;
    let debug = overlays.debug.is_some();

    {
        let target = &mut *target;
        let mut d = rl.begin_texture_mode(&th, &mut target.texture);
        d.clear_background(overlays.camera.background);

        let shake = overlays.camera.shake_offset();
        let mut sorted: Vec<_> = drawables.iter().collect();
        sorted.sort_by_key(|item| item.1.map_or(0, |z| z.0));
        for (position, _, shape, sprite, text, tint, scale, rotation, bob) in sorted {
            let mut at = position.pos + shake;
            if let Some(bob) = bob {
                at += bob.offset();
            }
            let pen = Pen {
                at,
                scale: scale.map_or(Vector2::one(), |s| s.scale),
                degrees: rotation.map_or(0.0, |r| r.degrees),
                tint: tint.copied().unwrap_or_default(),
            };
            let drew_sprite = sprite.is_some_and(|s| draw_sprite(&mut d, &textures, s, &pen));
            if !drew_sprite {
                if let Some(shape) = shape {
                    draw_shape(&mut d, shape, &pen);
                }
            }
            if let Some(text) = text {
                draw_dynamic_text(&mut d, font, text, &pen);
            }
        }

        if let (Some(dark), Some(player)) = (darkness.iter().next(), players.iter().next()) {
            draw_darkness(&mut d, dark, player.pos + shake, view_w, view_h);
        }
        if overlays.hud.visible {
            draw_hud(&mut d, font, &overlays.hud);
        }
        let gameplay = overlays.scenes.current().is_some_and(|s| s.is_gameplay());
        if gameplay && overlays.touch.enabled {
            draw_touch(&mut d, font, &overlays.touch);
        }
        if overlays.dialogue.active {
            draw_dialogue(&mut d, font, &overlays.dialogue, overlays.time.elapsed);
        }
        let full = Rectangle::new(0.0, 0.0, view_w, view_h);
        if let Some(color) = overlays.camera.flash_overlay() {
            d.draw_rectangle_rec(full, color);
        }
        if let Some(color) = overlays.camera.fade_overlay() {
            d.draw_rectangle_rec(full, color);
        }
        if debug {
            draw_colliders(&mut d, &colliders, shake);
        }
    }

    let letterbox = overlays
        .window
        .calculate_letterbox(target.game_width, target.game_height);
    let mut d = rl.begin_drawing(&th);
    d.clear_background(Color::BLACK);
    d.draw_texture_pro(
        &target.texture,
        target.source_rect(),
        letterbox,
        Vector2::zero(),
        0.0,
        Color::WHITE,
    );
    if debug {
        let scene = overlays
            .scenes
            .current()
            .map_or_else(|| "-".to_string(), |s| format!("{:?}", s));
        let lines = [
            format!("DEBUG (F11) | FPS: {}", d.get_fps()),
            format!("Entities: {}", entities.iter().count()),
            format!("Scene: {}", scene),
        ];
        for (i, line) in lines.iter().enumerate() {
            d.draw_text(line, 10, 10 + i as i32 * 20, 10, Color::YELLOW);
        }
    }
}

// ==================== PEN ====================

/// Placement of one entity: local shape coordinates go through scale, then
/// rotation, then translation; every colour is multiplied by the tint.
struct Pen {
    at: Vector2,
    scale: Vector2,
    degrees: f32,
    tint: Tint,
}

impl Pen {
    fn p(&self, x: f32, y: f32) -> Vector2 {
        let v = Vector2::new(x * self.scale.x, y * self.scale.y);
        let (s, c) = self.degrees.to_radians().sin_cos();
        Vector2::new(self.at.x + v.x * c - v.y * s, self.at.y + v.x * s + v.y * c)
    }

    fn r(&self, radius: f32) -> f32 {
        radius * (self.scale.x.abs() + self.scale.y.abs()) * 0.5
    }

    fn c(&self, color: Color) -> Color {
        self.tint.multiply(color)
    }

    fn circle(&self, d: &mut impl RaylibDraw, x: f32, y: f32, radius: f32, color: Color) {
        d.draw_circle_v(self.p(x, y), self.r(radius), self.c(color));
    }

    fn rect(&self, d: &mut impl RaylibDraw, x: f32, y: f32, w: f32, h: f32, color: Color) {
        let center = self.p(x + w / 2.0, y + h / 2.0);
        let (sw, sh) = (w * self.scale.x.abs(), h * self.scale.y.abs());
        d.draw_rectangle_pro(
            Rectangle::new(center.x, center.y, sw, sh),
            Vector2::new(sw / 2.0, sh / 2.0),
            self.degrees,
            self.c(color),
        );
    }

    fn rounded(&self, d: &mut impl RaylibDraw, w: f32, h: f32, color: Color) {
        let (sw, sh) = (w * self.scale.x.abs(), h * self.scale.y.abs());
        let rec = Rectangle::new(self.at.x - sw / 2.0, self.at.y - sh / 2.0, sw, sh);
        d.draw_rectangle_rounded(rec, 0.2, 6, self.c(color));
    }

    fn triangle(&self, d: &mut impl RaylibDraw, a: (f32, f32), b: (f32, f32), c: (f32, f32), color: Color) {
        fill_triangle(d, self.p(a.0, a.1), self.p(b.0, b.1), self.p(c.0, c.1), self.c(color));
    }
}

/// raylib only fills counter-clockwise triangles; fix the winding first.
fn fill_triangle(d: &mut impl RaylibDraw, a: Vector2, b: Vector2, c: Vector2, color: Color) {
    let cross = (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x);
    if cross > 0.0 {
        d.draw_triangle(a, c, b, color);
    } else {
        d.draw_triangle(a, b, c, color);
    }
}

// ==================== WORLD ====================

fn draw_sprite(d: &mut impl RaylibDraw, textures: &TextureStore, sprite: &Sprite, pen: &Pen) -> bool {
    let Some(texture) = textures.get(&sprite.tex_key) else {
        return false;
    };
    let (sx, sy, sw, sh) = sprite.source_rect(texture.width as f32, texture.height as f32);
    let w = sprite.display_width * pen.scale.x.abs();
    let h = sprite.display_height * pen.scale.y.abs();
    d.draw_texture_pro(
        texture,
        Rectangle::new(sx, sy, sw, sh),
        Rectangle::new(pen.at.x, pen.at.y, w, h),
        Vector2::new(w / 2.0, h / 2.0),
        pen.degrees,
        pen.tint.color,
    );
    true
}

fn draw_shape(d: &mut impl RaylibDraw, shape: &Shape, pen: &Pen) {
    match shape {
        Shape::Circle { radius, color } => pen.circle(d, 0.0, 0.0, *radius, *color),
        Shape::Ring {
            radius,
            thickness,
            color,
        } => {
            let outer = pen.r(*radius);
            d.draw_ring(pen.at, (outer - thickness).max(0.0), outer, 0.0, 360.0, 48, pen.c(*color));
        }
        Shape::Rect { width, height, color } => {
            pen.rect(d, -width / 2.0, -height / 2.0, *width, *height, *color)
        }
        Shape::RoundedRect { width, height, color } => pen.rounded(d, *width, *height, *color),
        Shape::Outline {
            width,
            height,
            thickness,
            color,
        } => d.draw_rectangle_lines_ex(
            Rectangle::new(pen.at.x, pen.at.y, *width, *height),
            *thickness,
            pen.c(*color),
        ),
        Shape::Line { to, thickness, color } => {
            d.draw_line_ex(pen.at, pen.p(to.x, to.y), *thickness, pen.c(*color))
        }
        Shape::Heart { size, filled } => draw_heart(d, pen.at, pen.r(*size), *filled, &pen.tint),
        Shape::Tree => {
            pen.rect(d, -4.0, 0.0, 8.0, 16.0, rgb(0x5c3a1e));
            pen.circle(d, 0.0, -6.0, 16.0, rgb(0x2d7a3a));
            pen.circle(d, -5.0, -10.0, 10.0, rgba(0x3a9e4a, 0.7));
            pen.circle(d, 6.0, -8.0, 11.0, rgba(0x3a9e4a, 0.7));
        }
        Shape::Rock => {
            pen.circle(d, 0.0, 0.0, 12.0, rgb(0x555566));
            pen.circle(d, -3.0, -3.0, 8.0, rgb(0x666677));
        }
        Shape::Flower { petal } => {
            for p in flower_petals(pen.at, pen.degrees) {
                d.draw_circle_v(p, 4.0, pen.c(with_alpha(*petal, 0.9)));
            }
            pen.circle(d, 0.0, 0.0, 3.0, rgb(0xffee44));
        }
        Shape::Hero => {
            pen.rounded(d, 20.0, 26.0, rgb(0xff6644));
            pen.circle(d, 0.0, -14.0, 9.0, rgb(0xffcc99));
            pen.circle(d, -3.0, -15.0, 1.5, Color::BLACK);
            pen.circle(d, 3.0, -15.0, 1.5, Color::BLACK);
        }
        Shape::Jhulian => {
            pen.rounded(d, 32.0, 32.0, rgb(0x44cc44));
            pen.circle(d, -3.0, 2.0, 3.0, rgb(0xff4444));
            pen.circle(d, 3.0, 2.0, 3.0, rgb(0xff4444));
            pen.triangle(d, (-6.0, 3.0), (0.0, 9.0), (6.0, 3.0), rgb(0xff4444));
        }
        Shape::Enemy { look, size, color } => draw_enemy(d, pen, *look, *size, *color),
        Shape::Boss { look, size, color } => draw_boss(d, pen, *look, *size, *color),
        Shape::Npc { look } => draw_npc(d, pen, *look),
        Shape::Arrow { size, color } => {
            let h = size / 2.0;
            pen.triangle(d, (-h, -h), (0.0, h), (h, -h), *color);
        }
    }
}

fn draw_heart(d: &mut impl RaylibDraw, center: Vector2, size: f32, filled: bool, tint: &Tint) {
    let (left, right, radius, tri) = heart_geometry(center, size);
    let color = tint.multiply(heart_color(filled));
    d.draw_circle_v(left, radius, color);
    d.draw_circle_v(right, radius, color);
    fill_triangle(d, tri[0], tri[1], tri[2], color);
    if filled {
        let rim = tint.multiply(rgba(0xff5577, 0.5));
        d.draw_ring(left, radius - 1.0, radius, 0.0, 360.0, 24, rim);
        d.draw_ring(right, radius - 1.0, radius, 0.0, 360.0, 24, rim);
    }
}

fn draw_eyes(d: &mut impl RaylibDraw, pen: &Pen, x: f32, y: f32, radius: f32, color: Color) {
    pen.circle(d, -x, y, radius, color);
    pen.circle(d, x, y, radius, color);
}

fn draw_enemy(d: &mut impl RaylibDraw, pen: &Pen, look: EnemyLook, size: f32, color: Color) {
    match look {
        EnemyLook::Bat => {
            let body = size * 0.35;
            let span = size * 0.75;
            pen.triangle(d, (-body * 0.6, -2.0), (-span, -body), (-span * 0.7, body * 0.6), color);
            pen.triangle(d, (body * 0.6, -2.0), (span, -body), (span * 0.7, body * 0.6), color);
            pen.circle(d, 0.0, 0.0, body, color);
            draw_eyes(d, pen, body * 0.35, -body * 0.2, 2.0, rgb(0xff3344));
        }
        EnemyLook::Generic => {
            pen.rounded(d, size, size, color);
            draw_eyes(d, pen, 5.0, -4.0, 3.0, rgba(0xffffff, 0.8));
            draw_eyes(d, pen, 5.0, -4.0, 1.5, Color::BLACK);
        }
    }
}

fn draw_boss(d: &mut impl RaylibDraw, pen: &Pen, look: BossLook, size: f32, color: Color) {
    let s = size;
    match look {
        BossLook::Slime => {
            pen.circle(d, 0.0, 0.0, s / 2.0, rgb(0x44aa44));
            pen.circle(d, -s / 4.0, -s / 4.0, s / 6.0, rgba(0x66cc66, 0.8));
            pen.circle(d, 0.0, 0.0, s / 4.0, rgb(0x228822));
            draw_eyes(d, pen, 10.0, -5.0, 4.0, rgb(0xffff00));
            draw_eyes(d, pen, 10.0, -5.0, 1.5, Color::BLACK);
        }
        BossLook::Ice => {
            let top = (0.0, -s / 2.0 - 10.0);
            let right = (s / 2.0 + 5.0, 0.0);
            let bottom = (0.0, s / 2.0 + 10.0);
            let left = (-s / 2.0 - 5.0, 0.0);
            let fill = rgba(0x44ccff, 0.8);
            pen.triangle(d, top, left, right, fill);
            pen.triangle(d, bottom, right, left, fill);
            let edge = pen.c(rgba(0xffffff, 0.8));
            let corners = [top, right, bottom, left];
            for i in 0..4 {
                let (a, b) = (corners[i], corners[(i + 1) % 4]);
                d.draw_line_ex(pen.p(a.0, a.1), pen.p(b.0, b.1), 3.0, edge);
            }
            pen.circle(d, 0.0, 0.0, s / 3.0, rgba(0xffffff, 0.5));
            draw_eyes(d, pen, 10.0, -5.0, 4.0, rgb(0x000055));
        }
        BossLook::Fire => {
            let points = [
                (0.0, -s / 1.5),
                (s / 4.0, -s / 4.0),
                (s / 1.5, -s / 4.0),
                (s / 3.0, s / 4.0),
                (s / 2.0, s / 1.5),
                (0.0, s / 2.0),
                (-s / 2.0, s / 1.5),
                (-s / 3.0, s / 4.0),
                (-s / 1.5, -s / 4.0),
                (-s / 4.0, -s / 4.0),
            ];
            let fill = rgb(0xff4422);
            for i in 0..points.len() {
                pen.triangle(d, (0.0, 0.0), points[i], points[(i + 1) % points.len()], fill);
            }
            pen.circle(d, 0.0, 0.0, s / 3.0, rgba(0xffaa00, 0.8));
            draw_eyes(d, pen, 8.0, 0.0, 5.0, rgb(0xffff00));
        }
        BossLook::Generic => {
            pen.rounded(d, s, s, color);
            let rim = Rectangle::new(pen.at.x - s / 2.0 - 2.0, pen.at.y - s / 2.0 - 2.0, s + 4.0, s + 4.0);
            d.draw_rectangle_lines_ex(rim, 2.0, pen.c(rgba(0xcc66ff, 0.6)));
            draw_eyes(d, pen, 12.0, -8.0, 5.0, rgba(0xff0000, 0.9));
            draw_eyes(d, pen, 12.0, -8.0, 2.5, rgb(0xffff00));
        }
    }
}

fn draw_npc(d: &mut impl RaylibDraw, pen: &Pen, look: NpcLook) {
    match look {
        NpcLook::Echo => {
            let glow = rgba(0xaaccff, 0.7);
            pen.triangle(d, (-12.0, 0.0), (0.0, 18.0), (12.0, 0.0), glow);
            pen.circle(d, 0.0, 0.0, 12.0, glow);
            draw_eyes(d, pen, 4.0, -2.0, 2.0, rgb(0x223355));
        }
        NpcLook::Generic => {
            pen.rounded(d, 28.0, 28.0, rgb(0xffcc44));
            draw_eyes(d, pen, 5.0, -4.0, 2.0, Color::BLACK);
            let r = pen.r(6.0);
            d.draw_ring(pen.p(0.0, 1.0), r - 0.75, r + 0.75, 0.0, 180.0, 12, pen.c(Color::BLACK));
        }
    }
}

fn draw_dynamic_text(d: &mut impl RaylibDraw, font: ffi::Font, text: &DynamicText, pen: &Pen) {
    let size = text.font_size * pen.scale.y.abs();
    let lines: Vec<&str> = text.lines().collect();
    let line_height = size * 1.5;
    let block_h = line_height * (lines.len() as f32 - 1.0) + size;
    let top = pen.at.y - block_h * text.origin.y;
    for (i, line) in lines.iter().enumerate() {
        let width = measure_text(font, line, size).x;
        let at = Vector2::new(pen.at.x - width * text.origin.x, top + i as f32 * line_height);
        if let Some((offset, color)) = text.shadow {
            draw_text(d, font, line, at + offset, size, pen.c(color));
        }
        draw_text(d, font, line, at, size, pen.c(text.color));
    }
}

fn draw_darkness(d: &mut impl RaylibDraw, dark: &Darkness, center: Vector2, view_w: f32, view_h: f32) {
    let layers = dark.layers(center, view_w, view_h);
    let shade = rgba(0x000000, dark.alpha);
    for band in layers.bands {
        d.draw_rectangle_rec(band, shade);
    }
    for (radius, alpha) in layers.rings {
        d.draw_circle_v(center, radius, rgba(0x000000, alpha));
    }
}

fn draw_colliders(d: &mut impl RaylibDraw, colliders: &Query<(&MapPosition, &BoxCollider)>, shake: Vector2) {
    for (position, collider) in colliders.iter() {
        let mut rect = collider.rect(position.pos);
        rect.x += shake.x;
        rect.y += shake.y;
        d.draw_rectangle_lines_ex(rect, 1.0, Color::RED);
        let p = position.pos + shake;
        d.draw_line_ex(Vector2::new(p.x - 4.0, p.y), Vector2::new(p.x + 4.0, p.y), 1.0, Color::GREEN);
        d.draw_line_ex(Vector2::new(p.x, p.y - 4.0), Vector2::new(p.x, p.y + 4.0), 1.0, Color::GREEN);
    }
}

// ==================== OVERLAYS ====================

fn draw_hud(d: &mut impl RaylibDraw, font: ffi::Font, hud: &Hud) {
    let plain = Tint::default();
    for (i, heart) in hud.hearts().into_iter().enumerate() {
        let center = Vector2::new(HEART_X + i as f32 * HEART_SPACING, HEART_Y);
        match heart {
            HeartState::Full => draw_heart(d, center, HEART_SIZE, true, &plain),
            HeartState::Empty => draw_heart(d, center, HEART_SIZE, false, &plain),
            HeartState::Half => {
                draw_heart(d, center, HEART_SIZE, true, &plain);
                let cover = Rectangle::new(center.x, center.y - HEART_SIZE, HEART_SIZE, HEART_SIZE * 2.0);
                d.draw_rectangle_rec(cover, heart_color(false));
            }
        }
    }

    if let Some(mission) = &hud.mission {
        let width = measure_text(font, mission, 10.0).x;
        let at = Vector2::new(400.0 - width / 2.0, 16.0);
        outlined_text(d, font, mission, at, 10.0, rgb(0xccbbee));
    }

    if let Some(bar) = &hud.boss_bar {
        let back = Rectangle::new(250.0, 575.0, 300.0, 14.0);
        d.draw_rectangle_rounded(back, 0.4, 6, rgb(0x222233));
        d.draw_rectangle_lines_ex(back, 1.0, rgba(0x7744aa, 0.8));
        let fraction = bar.fraction.clamp(0.0, 1.0);
        if fraction > 0.0 {
            let fill = Rectangle::new(252.0, 577.0, 296.0 * fraction, 10.0);
            d.draw_rectangle_rounded(fill, 0.4, 6, boss_bar_color(fraction));
        }
        let width = measure_text(font, &bar.name, 9.0).x;
        outlined_text(d, font, &bar.name, Vector2::new(400.0 - width / 2.0, 555.0), 9.0, rgb(0xcc88ff));
    }
}

fn draw_touch(d: &mut impl RaylibDraw, font: ffi::Font, touch: &TouchControls) {
    for button in &touch.buttons {
        let fill = if button.pressed { 0.18 } else { 0.3 };
        d.draw_circle_v(button.center, button.radius, with_alpha(button.color, fill));
        d.draw_ring(
            button.center,
            button.radius - 2.0,
            button.radius,
            0.0,
            360.0,
            48,
            with_alpha(button.color, 0.5),
        );
        let size = 12.0;
        let extent = measure_text(font, button.label, size);
        let at = Vector2::new(button.center.x - extent.x / 2.0, button.center.y - extent.y / 2.0);
        draw_text(d, font, button.label, at, size, rgba(0xffffff, 0.8));
    }
}

fn draw_dialogue(d: &mut impl RaylibDraw, font: ffi::Font, dialogue: &DialogueManager, now: f32) {
    let b = DIALOGUE_BOX;
    d.draw_rectangle_rec(b, rgba(0x0a0a1a, 0.92));
    d.draw_rectangle_lines_ex(b, 2.0, rgb(0x7744aa));

    let mut y = b.y + 14.0;
    if !dialogue.speaker.is_empty() {
        draw_text(d, font, &dialogue.speaker, Vector2::new(b.x + 20.0, y), DIALOGUE_FONT, rgb(0xcc88ff));
        y += DIALOGUE_LINE + 6.0;
    }
    let lines = wrap_text(dialogue.visible_text(), b.width - 40.0, |s| {
        measure_text(font, s, DIALOGUE_FONT).x
    });
    for line in lines {
        draw_text(d, font, &line, Vector2::new(b.x + 20.0, y), DIALOGUE_FONT, Color::WHITE);
        y += DIALOGUE_LINE;
    }

    if !dialogue.is_typing() && (now * 2.0).fract() < 0.6 {
        let hint = "Click para continuar";
        let width = measure_text(font, hint, 7.0).x;
        let at = Vector2::new(b.x + b.width - 20.0 - width, b.y + b.height - 18.0);
        let color = rgb(0x8888aa);
        fill_triangle(
            d,
            Vector2::new(at.x - 14.0, at.y),
            Vector2::new(at.x - 10.0, at.y + 6.0),
            Vector2::new(at.x - 6.0, at.y),
            color,
        );
        draw_text(d, font, hint, at, 7.0, color);
    }
}

// ==================== TEXT ====================

fn measure_text(font: ffi::Font, text: &str, size: f32) -> Vector2 {
    let Ok(c_text) = CString::new(text) else {
        return Vector2::zero();
    };
    let measured = unsafe { ffi::MeasureTextEx(font, c_text.as_ptr(), size, SPACING) };
    Vector2::new(measured.x, measured.y)
}

fn draw_text(_d: &mut impl RaylibDraw, font: ffi::Font, text: &str, at: Vector2, size: f32, color: Color) {
    let Ok(c_text) = CString::new(text) else {
        return;
    };
    unsafe {
        ffi::DrawTextEx(font, c_text.as_ptr(), at.into(), size, SPACING, color.into());
    }
}

/// Text with a one pixel black outline.
fn outlined_text(d: &mut impl RaylibDraw, font: ffi::Font, text: &str, at: Vector2, size: f32, color: Color) {
    for (dx, dy) in [(-1.0, 0.0), (1.0, 0.0), (0.0, -1.0), (0.0, 1.0)] {
        draw_text(d, font, text, at + Vector2::new(dx, dy), size, Color::BLACK);
    }
    draw_text(d, font, text, at, size, color);
}
