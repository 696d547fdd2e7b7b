// Fighter entity: physics, input, combat and animation for one player

use super::animation::AnimationTable;
use super::roster::FighterPreset;
use super::state::{locomotion_state, AnimState};
use super::stats::FighterStats;
use crate::core::Rect;
use crate::engine::input::{Action, InputEvent, PlayerInput};
use crate::engine::physics::{Body, Hitbox};
use crate::engine::renderer::{AnimatedSprite, RenderSurface};
use crate::game::arena::Stage;
use log::trace;

/// Which way a fighter's attack reaches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    /// Sign applied to horizontal hitbox offsets
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// A player-controlled character
///
/// Composes an animated sprite (what is drawn), a body (where it is) and a
/// hitbox (what it can hit). Facing is fixed for the whole match.
#[derive(Debug, Clone)]
pub struct Fighter {
    name: &'static str,
    sprite: AnimatedSprite,
    sheets: AnimationTable,
    anim_state: AnimState,
    body: Body,
    facing: Facing,
    hitbox: Hitbox,
    health: i32,
    is_attacking: bool,
    is_dead: bool,
    controls: PlayerInput,
    stats: FighterStats,
    active_frame: u32,
}

impl Fighter {
    /// Build a fresh fighter at its preset spawn point
    pub fn new(preset: &FighterPreset) -> Self {
        let stats = preset.stats;
        let idle = preset.sheets.sheet(AnimState::Idle);

        let body = Body::new(
            preset.spawn_position,
            preset.spawn_velocity,
            glam::Vec2::new(stats.width, stats.height),
        );

        let sprite = AnimatedSprite::new(body.position, body.size, idle.image)
            .with_frames(idle.frame_count, idle.frame_hold)
            .with_scale(preset.sprite_scale)
            .with_offset(preset.sprite_offset);

        let mut offset = preset.hitbox_offset;
        offset.x *= preset.facing.sign();
        let mut hitbox = Hitbox::new(offset, preset.hitbox_size.x, preset.hitbox_size.y);
        hitbox.follow(body.position);

        Self {
            name: preset.name,
            sprite,
            sheets: preset.sheets.clone(),
            anim_state: AnimState::Idle,
            body,
            facing: preset.facing,
            hitbox,
            health: stats.max_health,
            is_attacking: false,
            is_dead: false,
            controls: PlayerInput::new(),
            stats,
            active_frame: preset.active_frame,
        }
    }

    /// Run one tick: input, physics, state resolution, then draw and animate
    pub fn update(
        &mut self,
        events: &[InputEvent],
        stage: &Stage,
        surface: &mut dyn RenderSurface,
    ) {
        self.handle_input(events);

        self.hitbox.follow(self.body.position);
        self.body.integrate(stage.gravity, stage.ground_y());

        self.resolve_motion(stage);

        self.sprite.position = self.body.position;
        self.sprite.render(surface);
        if !self.is_dead {
            self.sprite.advance_frame();
        }
    }

    /// Fold queued press/release events into the controls
    ///
    /// Jump and attack act on press. Events are dropped entirely once the
    /// fighter is dying.
    pub fn handle_input(&mut self, events: &[InputEvent]) {
        if !self.anim_state.accepts_input() {
            return;
        }

        for &event in events {
            match self.controls.apply(event) {
                Some(Action::Jump) => self.jump(),
                Some(Action::Attack) => self.attack(),
                _ => {}
            }
        }
    }

    /// Leave the ground, if standing on it
    pub fn jump(&mut self) {
        if self.body.velocity.y == 0.0 {
            self.body.velocity.y = -self.stats.jump_impulse;
        }
    }

    /// Start a swing
    ///
    /// The damage window is armed only when this actually enters the attack
    /// state; a press during hit-stun, death or an ongoing swing changes
    /// nothing.
    pub fn attack(&mut self) {
        let was_attacking = self.anim_state == AnimState::Attack;
        self.switch_state(AnimState::Attack);
        if !was_attacking && self.anim_state == AnimState::Attack {
            self.is_attacking = true;
        }
    }

    /// Absorb one hit
    ///
    /// Always costs `hit_damage` and forces Hit (or Death when health runs
    /// out), interrupting any swing. A killing blow also stops the fighter
    /// where it stands.
    pub fn take_hit(&mut self) {
        self.health -= self.stats.hit_damage;
        self.is_attacking = false;

        if self.health <= 0 {
            self.body.velocity.x = 0.0;
            self.force_state(AnimState::Death);
        } else {
            self.force_state(AnimState::Hit);
        }
    }

    /// Close the damage window of the current swing
    pub fn end_attack_window(&mut self) {
        self.is_attacking = false;
    }

    /// Whether this tick is the swing's damage window
    pub fn in_damage_window(&self) -> bool {
        self.is_attacking && self.sprite.current_frame() == self.active_frame
    }

    /// Forget held controls, as if every key were released
    pub fn release_controls(&mut self) {
        self.controls.reset();
    }

    /// Pick horizontal velocity from held input and the locomotion state
    fn resolve_motion(&mut self, stage: &Stage) {
        self.body.velocity.x = 0.0;

        if self.anim_state.accepts_input() {
            let intent = self.controls.horizontal_intent();
            let x = self.body.position.x;
            if intent < 0.0 && x > 0.0 {
                self.body.velocity.x = -self.stats.move_speed;
            } else if intent > 0.0 && x < stage.width - self.body.size.x {
                self.body.velocity.x = self.stats.move_speed;
            }
        }

        let moving = self.body.velocity.x != 0.0;
        self.switch_state(locomotion_state(moving, self.body.velocity.y));
    }

    /// Request a state change, honouring commitments
    fn switch_state(&mut self, next: AnimState) {
        if self.anim_state == AnimState::Death {
            if self.sprite.on_last_frame() && !self.is_dead {
                self.is_dead = true;
                trace!("{} death animation finished", self.name);
            }
            return;
        }

        if self.anim_state.holds(self.sprite.on_last_frame()) || self.anim_state == next {
            return;
        }

        self.enter(next);
    }

    /// Change state regardless of commitments (death stays terminal)
    fn force_state(&mut self, next: AnimState) {
        if self.anim_state == AnimState::Death || self.anim_state == next {
            return;
        }
        self.enter(next);
    }

    fn enter(&mut self, next: AnimState) {
        let sheet = self.sheets.sheet(next);
        self.sprite.set_sheet(sheet.image, sheet.frame_count, sheet.frame_hold);
        self.anim_state = next;
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Raw health, may be negative after the killing blow
    pub fn health(&self) -> i32 {
        self.health
    }

    /// Health as shown to players, never below zero
    pub fn displayed_health(&self) -> i32 {
        self.health.max(0)
    }

    pub fn anim_state(&self) -> AnimState {
        self.anim_state
    }

    pub fn is_attacking(&self) -> bool {
        self.is_attacking
    }

    pub fn is_dead(&self) -> bool {
        self.is_dead
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn body_rect(&self) -> Rect {
        self.body.rect()
    }

    pub fn hitbox(&self) -> &Hitbox {
        &self.hitbox
    }

    pub fn hitbox_rect(&self) -> Rect {
        self.hitbox.rect()
    }

    pub fn sprite(&self) -> &AnimatedSprite {
        &self.sprite
    }

    pub fn controls(&self) -> &PlayerInput {
        &self.controls
    }

    pub fn active_frame(&self) -> u32 {
        self.active_frame
    }

    pub fn stats(&self) -> &FighterStats {
        &self.stats
    }

    #[cfg(test)]
    pub(crate) fn set_health(&mut self, health: i32) {
        self.health = health;
    }
}
