//! Axis-separated tile collision
//!
//! Resolves the moving player rectangle against the static tile grid,
//! X axis fully before Y. Per-tick speeds stay below one tile, so
//! there is no swept test; tunneling at absurd speeds is an accepted
//! limit of the discretization, not a bug.

use macroquad::math::Rect;

use crate::map::Tile;

use super::player::Player;

/// Strict AABB intersection: touching edges do not collide.
///
/// A body resting exactly on the floor must not register during the X
/// phase, or walking along the ground would clamp against every floor
/// tile it crosses.
fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}

/// Move the player by its velocity, clamping against overlapping
/// tiles and recomputing the grounded flag.
///
/// Within each axis, tiles are visited in map insertion order and the
/// last clamp wins; the exact pixel outcome in concave corners is an
/// accepted inexactness of the approach.
pub fn move_and_collide(player: &mut Player, tiles: &[Tile]) {
    // X phase
    player.pos.x += player.vel.x;
    let mut rect = player.rect();
    for tile in tiles {
        let bounds = tile.bounds();
        if !overlaps(&rect, &bounds) {
            continue;
        }
        if player.vel.x < 0.0 {
            rect.x = bounds.right();
        }
        if player.vel.x > 0.0 {
            rect.x = bounds.x - rect.w;
        }
        player.pos.x = rect.x;
    }

    // Grounded only survives the tick if a downward hit re-establishes it
    player.grounded = false;

    // Y phase
    player.pos.y += player.vel.y;
    let mut rect = player.rect();
    for tile in tiles {
        let bounds = tile.bounds();
        if !overlaps(&rect, &bounds) {
            continue;
        }
        if player.vel.y < 0.0 {
            rect.y = bounds.bottom();
            player.vel.y = 0.0;
        }
        if player.vel.y > 0.0 {
            rect.y = bounds.y - rect.h;
            player.vel.y = 0.0;
            player.grounded = true;
        }
        player.pos.y = rect.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::MapPos;
    use macroquad::math::Vec2;

    fn tile_at(x: i32, y: i32) -> Tile {
        Tile { pos: MapPos::new(x, y), col: 0, row: 0 }
    }

    fn player_at(pos: Vec2, vel: Vec2) -> Player {
        let mut player = Player::new(pos);
        player.vel = vel;
        player
    }

    #[test]
    fn test_falling_body_lands_on_tile_top() {
        let tiles = [tile_at(0, 0)];
        let mut player = player_at(Vec2::new(0.0, -10.0), Vec2::new(0.0, 6.0));

        move_and_collide(&mut player, &tiles);

        assert_eq!(player.pos, Vec2::new(0.0, -32.0));
        assert_eq!(player.vel.y, 0.0);
        assert!(player.grounded);
    }

    #[test]
    fn test_moving_left_clamps_to_tile_right_edge() {
        let tiles = [tile_at(0, 0)];

        // Shallow overlap
        let mut player = player_at(Vec2::new(34.0, 0.0), Vec2::new(-6.0, 0.0));
        move_and_collide(&mut player, &tiles);
        assert_eq!(player.pos.x, 32.0);

        // Deep overlap clamps to the same edge
        let mut player = player_at(Vec2::new(34.0, 0.0), Vec2::new(-20.0, 0.0));
        move_and_collide(&mut player, &tiles);
        assert_eq!(player.pos.x, 32.0);
    }

    #[test]
    fn test_moving_right_clamps_to_tile_left_edge() {
        let tiles = [tile_at(64, 0)];
        let mut player = player_at(Vec2::new(26.0, 0.0), Vec2::new(8.0, 0.0));

        move_and_collide(&mut player, &tiles);

        assert_eq!(player.pos.x, 32.0);
    }

    #[test]
    fn test_upward_hit_clamps_to_tile_bottom_and_zeroes_velocity() {
        let tiles = [tile_at(0, 0)];
        let mut player = player_at(Vec2::new(0.0, 34.0), Vec2::new(0.0, -6.0));

        move_and_collide(&mut player, &tiles);

        assert_eq!(player.pos.y, 32.0);
        assert_eq!(player.vel.y, 0.0);
        assert!(!player.grounded);
    }

    #[test]
    fn test_resting_contact_does_not_block_walking() {
        // Floor row directly under the body
        let tiles = [tile_at(0, 32), tile_at(32, 32), tile_at(64, 32)];
        let mut player = player_at(Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0));

        move_and_collide(&mut player, &tiles);

        assert_eq!(player.pos.x, 4.0);
    }

    #[test]
    fn test_grounded_is_not_sticky() {
        let mut player = player_at(Vec2::new(0.0, 0.0), Vec2::ZERO);
        player.grounded = true;

        move_and_collide(&mut player, &[]);

        assert!(!player.grounded);
    }
}
