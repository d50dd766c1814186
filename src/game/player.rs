//! Player physics body

use macroquad::math::{Rect, Vec2};

use crate::map::Tile;

use super::collision;

/// Horizontal speed in pixels per tick.
pub const MOVE_SPEED: f32 = 4.0;
/// Velocity applied on jump (negative is up).
pub const JUMP_SPEED: f32 = -8.0;
/// Downward acceleration per tick.
pub const GRAVITY: f32 = 0.4;
/// Terminal fall speed.
pub const MAX_FALL_SPEED: f32 = 10.0;
/// Body extent in pixels.
pub const PLAYER_SIZE: Vec2 = Vec2::new(32.0, 32.0);

/// Horizontal movement intent for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MoveDir {
    Left,
    #[default]
    None,
    Right,
}

/// Input intent sampled once per tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerInput {
    pub dir: MoveDir,
    pub jump: bool,
}

/// The physics body driven by the game session.
///
/// Position is continuous so gravity can accumulate in fractions of a
/// pixel between ticks; the grounded flag is recomputed every tick by
/// the collision pass.
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub grounded: bool,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            grounded: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, PLAYER_SIZE.x, PLAYER_SIZE.y)
    }

    /// Advance one tick.
    ///
    /// Input overrides horizontal velocity outright (no acceleration
    /// model), a jump is only honored while grounded, and gravity
    /// lands after collision resolution. The resolver therefore works
    /// with the vertical velocity set by the previous tick's gravity
    /// step.
    pub fn update(&mut self, input: PlayerInput, tiles: &[Tile]) {
        self.vel.x = match input.dir {
            MoveDir::Left => -MOVE_SPEED,
            MoveDir::Right => MOVE_SPEED,
            MoveDir::None => 0.0,
        };

        if input.jump && self.grounded {
            self.vel.y = JUMP_SPEED;
        }

        collision::move_and_collide(self, tiles);

        self.vel.y = (self.vel.y + GRAVITY).min(MAX_FALL_SPEED);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::MapPos;

    fn floor_row(y: i32) -> Vec<Tile> {
        (0..5)
            .map(|i| Tile { pos: MapPos::new(i * 32, y), col: 0, row: 0 })
            .collect()
    }

    #[test]
    fn test_airborne_jump_is_rejected() {
        let mut player = Player::new(Vec2::new(0.0, 0.0));
        assert!(!player.grounded);

        player.update(PlayerInput { dir: MoveDir::None, jump: true }, &[]);

        // Only gravity touched the vertical velocity
        assert_eq!(player.vel.y, GRAVITY);
    }

    #[test]
    fn test_grounded_jump_launches() {
        let tiles = floor_row(32);
        let mut player = Player::new(Vec2::new(0.0, 0.0));
        player.grounded = true;

        player.update(PlayerInput { dir: MoveDir::None, jump: true }, &tiles);

        assert_eq!(player.pos.y, JUMP_SPEED);
        assert_eq!(player.vel.y, JUMP_SPEED + GRAVITY);
        assert!(!player.grounded);
    }

    #[test]
    fn test_landing_zeroes_velocity_before_gravity_reapplies() {
        let tiles = floor_row(0);
        let mut player = Player::new(Vec2::new(0.0, -42.0));
        player.vel.y = 6.0;

        // Falls 6 px twice, the second tick would penetrate the floor
        player.update(PlayerInput::default(), &tiles);
        player.update(PlayerInput::default(), &tiles);

        assert_eq!(player.pos.y, -32.0);
        assert!(player.grounded);
        // Resolver zeroed vel.y, then the post-resolve gravity step ran
        assert_eq!(player.vel.y, GRAVITY);
    }

    #[test]
    fn test_fall_speed_is_clamped() {
        let mut player = Player::new(Vec2::new(0.0, 0.0));

        for _ in 0..200 {
            player.update(PlayerInput::default(), &[]);
            assert!(player.vel.y <= MAX_FALL_SPEED);
        }
        assert_eq!(player.vel.y, MAX_FALL_SPEED);
    }

    #[test]
    fn test_input_fully_overrides_horizontal_velocity() {
        let mut player = Player::new(Vec2::new(0.0, 0.0));

        player.update(PlayerInput { dir: MoveDir::Right, jump: false }, &[]);
        assert_eq!(player.vel.x, MOVE_SPEED);
        assert_eq!(player.pos.x, MOVE_SPEED);

        player.update(PlayerInput { dir: MoveDir::None, jump: false }, &[]);
        assert_eq!(player.vel.x, 0.0);
        assert_eq!(player.pos.x, MOVE_SPEED);

        player.update(PlayerInput { dir: MoveDir::Left, jump: false }, &[]);
        assert_eq!(player.vel.x, -MOVE_SPEED);
        assert_eq!(player.pos.x, 0.0);
    }
}
