//! Game state and core simulation types
//!
//! Everything a session owns lives in [`GameSession`]; there is no ambient
//! global state. Entities hold a shape value and a kind tag, and collision
//! dispatch goes through the free functions in [`super::collision`].

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::{self, CollisionResult, ContactKind};
use super::shapes::{AxisAlignedRect, Circle};
use super::vector::{VectorExt, from_polar};
use crate::consts::GRID_COLUMNS;
use crate::layouts::{LayoutBook, LevelLayout};
use crate::render::Color;
use crate::settings::{CollisionPolicy, Settings};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Next tick builds the brick group for `level_index`
    Loading,
    /// Active gameplay
    Playing,
    /// Update phase frozen, only the pause toggle is honored
    Paused,
    /// Every destructible brick is gone; waiting before the next load
    LevelCleared,
}

/// Brick types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrickKind {
    #[default]
    Standard,
    /// Indestructible obstacle, doesn't count for level clear
    Concrete,
}

impl BrickKind {
    /// Layout cell value to brick kind (`0` is an empty cell)
    pub fn from_cell(value: u8) -> Option<Self> {
        match value {
            1 => Some(BrickKind::Standard),
            2 => Some(BrickKind::Concrete),
            _ => None,
        }
    }

    /// Returns true if this brick must be destroyed to clear the level
    pub fn is_destructible(&self) -> bool {
        *self == BrickKind::Standard
    }

    pub fn color_hint(&self) -> Color {
        match self {
            BrickKind::Standard => Color::gray(128),
            BrickKind::Concrete => Color::rgb(72, 64, 60),
        }
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub shape: Circle,
    /// Pixels per second
    pub vel: Vec2,
    /// Center before the last integration step
    pub prev_pos: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, radius: f32, vel: Vec2) -> crate::Result<Self> {
        Ok(Self {
            shape: Circle::new(pos, radius)?,
            vel,
            prev_pos: pos,
        })
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.shape.center
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.shape.radius
    }

    /// Replace a non-finite velocity with `fallback`. Returns true if the
    /// velocity was replaced.
    pub fn guard_velocity(&mut self, fallback: Vec2) -> bool {
        if self.vel.is_finite() {
            return false;
        }
        log::warn!("Ball velocity {} is not finite, resetting to {fallback}", self.vel);
        self.vel = fallback;
        true
    }

    /// Advance position by one timestep
    pub fn integrate(&mut self, dt: f32) {
        self.prev_pos = self.shape.center;
        self.shape.center += self.vel * dt;
    }

    /// Test against a rectangle and, on contact, reflect the velocity and
    /// push the ball out of it
    pub fn resolve_rect(&mut self, rect: &AxisAlignedRect, epsilon: f32) -> CollisionResult {
        let result = collision::ball_rect_collision(self.pos(), self.radius(), rect, epsilon);
        if result.hit {
            self.vel = collision::collision_response(self.vel, &result);
            self.shape.center = collision::separate(self.shape.center, &result);
        }
        result
    }

    /// Put the ball back at `pos` with velocity `vel`
    pub fn respawn(&mut self, pos: Vec2, vel: Vec2) {
        self.shape.center = pos;
        self.prev_pos = pos;
        self.vel = vel;
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: AxisAlignedRect,
    /// Horizontal speed over the last tick (pixels/s)
    pub vel: Vec2,
}

impl Paddle {
    /// Paddle centered horizontally at `center_x` with its top edge at `top`
    pub fn new(center_x: f32, top: f32, width: f32, height: f32) -> crate::Result<Self> {
        let rect = AxisAlignedRect::new(Vec2::new(center_x - width / 2.0, top), width, height)?;
        Ok(Self {
            rect,
            vel: Vec2::ZERO,
        })
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.rect.center().x
    }

    /// Move the center toward `target_x`, clamped to `[left, right]`
    pub fn move_to(&mut self, target_x: f32, left: f32, right: f32, dt: f32) {
        let half = self.rect.width / 2.0;
        let x = target_x.clamp(left + half, (right - half).max(left + half));
        let before = self.rect.origin.x;
        self.rect.origin.x = x - half;
        self.vel = if dt > 0.0 {
            Vec2::new((self.rect.origin.x - before) / dt, 0.0)
        } else {
            Vec2::ZERO
        };
    }

    /// Move by `direction * speed * dt` (`direction` in -1..=1)
    pub fn steer(&mut self, direction: f32, speed: f32, left: f32, right: f32, dt: f32) {
        let target = self.center_x() + direction.clamp(-1.0, 1.0) * speed * dt;
        self.move_to(target, left, right, dt);
    }
}

/// A brick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub rect: AxisAlignedRect,
    pub kind: BrickKind,
    pub destroyed: bool,
    pub color: Color,
    /// Layout cell as `(column, row)`
    pub cell: (usize, usize),
}

impl Brick {
    pub fn new(rect: AxisAlignedRect, kind: BrickKind, cell: (usize, usize)) -> Self {
        Self {
            rect,
            kind,
            destroyed: false,
            color: kind.color_hint(),
            cell,
        }
    }

    #[inline]
    pub fn is_live(&self) -> bool {
        !self.destroyed
    }
}

/// Where layout cells land on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrickGeometry {
    pub brick_width: f32,
    pub brick_height: f32,
    /// y of row 0's top edge
    pub top: f32,
}

impl BrickGeometry {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            brick_width: settings.brick_width,
            brick_height: settings.brick_height,
            top: settings.hud_height,
        }
    }

    pub fn cell_rect(&self, col: usize, row: usize) -> crate::Result<AxisAlignedRect> {
        AxisAlignedRect::new(
            Vec2::new(
                col as f32 * self.brick_width,
                self.top + row as f32 * self.brick_height,
            ),
            self.brick_width,
            self.brick_height,
        )
    }
}

/// A brick the ball struck this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrickHit {
    pub index: usize,
    pub cell: (usize, usize),
    pub kind: BrickKind,
    pub contact: ContactKind,
    pub destroyed: bool,
}

/// The active level's bricks and its score
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrickGroup {
    bricks: Vec<Brick>,
    /// Standard bricks in the group, destroyed or not
    destructible: u32,
    /// Standard bricks destroyed so far
    score: u32,
}

impl BrickGroup {
    pub fn from_layout(layout: &LevelLayout, geometry: &BrickGeometry) -> crate::Result<Self> {
        let mut group = Self::default();
        for (col, row, kind) in layout.cells() {
            group.add(Brick::new(geometry.cell_rect(col, row)?, kind, (col, row)));
        }
        Ok(group)
    }

    /// `count` standard bricks filling rows of nine, left to right
    pub fn from_count(count: usize, geometry: &BrickGeometry) -> crate::Result<Self> {
        let mut group = Self::default();
        for i in 0..count {
            let (col, row) = (i % GRID_COLUMNS, i / GRID_COLUMNS);
            group.add(Brick::new(
                geometry.cell_rect(col, row)?,
                BrickKind::Standard,
                (col, row),
            ));
        }
        Ok(group)
    }

    /// Add a brick. A standard brick that is already destroyed counts as
    /// both a clear target and a point scored.
    pub fn add(&mut self, brick: Brick) {
        if brick.kind.is_destructible() {
            self.destructible += 1;
            if !brick.is_live() {
                self.score += 1;
            }
        }
        self.bricks.push(brick);
    }

    /// Total bricks, including destroyed ones
    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    /// Brick at `index` unless it has been destroyed
    pub fn get(&self, index: usize) -> Option<&Brick> {
        self.bricks.get(index).filter(|b| b.is_live())
    }

    /// Index of the brick in `cell`, destroyed or not
    pub fn position(&self, cell: (usize, usize)) -> Option<usize> {
        self.bricks.iter().position(|b| b.cell == cell)
    }

    pub fn contains(&self, cell: (usize, usize)) -> bool {
        self.position(cell).is_some()
    }

    /// Take a brick out of the group, undoing whatever it contributed to
    /// the clear target and the score
    pub fn remove(&mut self, cell: (usize, usize)) -> Option<Brick> {
        let index = self.position(cell)?;
        let brick = self.bricks.remove(index);
        if brick.kind.is_destructible() {
            self.destructible -= 1;
            if !brick.is_live() {
                self.score -= 1;
            }
        }
        Some(brick)
    }

    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    pub fn live_bricks(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter().filter(|b| b.is_live())
    }

    pub fn destructible_count(&self) -> u32 {
        self.destructible
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// All standard bricks destroyed
    pub fn is_cleared(&self) -> bool {
        self.score >= self.destructible
    }

    /// Live bricks the ball overlaps, nearest first, as
    /// `(index, squared distance)`
    fn overlapping(&self, ball: &Ball) -> Vec<(usize, f32)> {
        let (center, r) = (ball.pos(), ball.radius());
        let mut hits: Vec<(usize, f32)> = self
            .bricks
            .iter()
            .enumerate()
            .filter(|(_, b)| b.is_live())
            .map(|(i, b)| (i, b.rect.closest_point(center).distance_squared(center)))
            .filter(|(_, d2)| *d2 < r * r)
            .collect();
        hits.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
        hits
    }

    /// Resolve the ball against the group
    ///
    /// Standard bricks are destroyed immediately on contact; concrete
    /// bricks only deflect. Under [`CollisionPolicy::AllOverlapping`] each
    /// candidate is re-tested after the previous push-out.
    pub fn update(
        &mut self,
        ball: &mut Ball,
        policy: CollisionPolicy,
        epsilon: f32,
    ) -> Vec<BrickHit> {
        let candidates = self.overlapping(ball);
        let limit = match policy {
            CollisionPolicy::NearestOnly => 1,
            CollisionPolicy::AllOverlapping => candidates.len(),
        };

        let mut hits = Vec::new();
        for (index, _) in candidates.into_iter().take(limit) {
            let brick = &mut self.bricks[index];
            let result = ball.resolve_rect(&brick.rect, epsilon);
            let Some(contact) = result.kind else {
                continue;
            };

            let destroyed = brick.kind.is_destructible();
            if destroyed {
                brick.destroyed = true;
                self.score += 1;
            }
            log::debug!(
                "Ball hit {:?} brick at {:?} ({:?})",
                brick.kind,
                brick.cell,
                contact
            );
            hits.push(BrickHit {
                index,
                cell: brick.cell,
                kind: brick.kind,
                contact,
                destroyed,
            });
        }
        hits
    }
}

/// Something the host may want to react to (sound, HUD flash, logging)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    LevelLoaded { index: usize, name: String },
    BrickDestroyed { cell: (usize, usize) },
    ConcreteHit { cell: (usize, usize) },
    PaddleHit,
    WallBounce,
    BallLost,
    VelocityReset,
    LevelCleared { index: usize },
    Paused,
    Resumed,
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    /// Fresh generator for the next draw; each call advances the stream
    pub fn next_rng(&mut self) -> Pcg32 {
        let rng = Pcg32::new(self.seed, self.stream);
        self.stream += 1;
        rng
    }
}

/// One running game: all entities, counters and settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    pub settings: Settings,
    pub layouts: LayoutBook,
    /// Index into `layouts` of the current level
    pub level_index: usize,
    pub phase: GamePhase,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickGroup,
    /// Bricks destroyed across all levels
    pub total_score: u64,
    pub levels_cleared: u32,
    /// Simulation tick counter (ticks spent playing)
    pub time_ticks: u64,
    /// Ticks left in the cleared state
    pub clear_ticks: u32,
    pub rng_state: RngState,
    /// Events raised since the host last drained them
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameSession {
    /// New session in the `Loading` phase; the first tick loads level 0
    pub fn new(settings: Settings, layouts: LayoutBook) -> crate::Result<Self> {
        settings.validate()?;
        Ok(Self::build(settings, layouts))
    }

    /// Session with default settings and the built-in layouts
    pub fn with_defaults() -> Self {
        Self::build(Settings::default(), LayoutBook::builtin())
    }

    /// Assemble a session from settings that already passed `validate`
    fn build(settings: Settings, layouts: LayoutBook) -> Self {
        let spawn = settings.spawn_point();
        let ball = Ball {
            shape: Circle {
                center: spawn,
                radius: settings.ball_radius,
            },
            vel: settings.launch_velocity(),
            prev_pos: spawn,
        };
        let paddle = Paddle {
            rect: AxisAlignedRect {
                origin: Vec2::new(
                    (settings.screen_width - settings.paddle_width) / 2.0,
                    settings.paddle_y(),
                ),
                width: settings.paddle_width,
                height: settings.paddle_height,
            },
            vel: Vec2::ZERO,
        };
        let rng_state = RngState::new(settings.seed);

        Self {
            settings,
            layouts,
            level_index: 0,
            phase: GamePhase::Loading,
            ball,
            paddle,
            bricks: BrickGroup::default(),
            total_score: 0,
            levels_cleared: 0,
            time_ticks: 0,
            clear_ticks: 0,
            rng_state,
            events: Vec::new(),
        }
    }

    pub fn current_layout(&self) -> &LevelLayout {
        self.layouts.get(self.level_index)
    }

    /// Build the current level's bricks, reset ball and paddle, start play
    pub fn load_level(&mut self) -> crate::Result<()> {
        let geometry = BrickGeometry::from_settings(&self.settings);
        let layout = self.layouts.get(self.level_index);
        self.bricks = BrickGroup::from_layout(layout, &geometry)?;
        let name = layout.name.clone();

        self.paddle.move_to(
            self.settings.screen_width / 2.0,
            0.0,
            self.settings.screen_width,
            0.0,
        );

        let jitter = self.settings.launch_jitter_deg.abs().to_radians();
        let offset = if jitter > 0.0 {
            self.rng_state.next_rng().random_range(-jitter..=jitter)
        } else {
            0.0
        };
        let angle = self.settings.launch_angle_deg.to_radians() + offset;
        self.ball.respawn(
            self.settings.spawn_point(),
            from_polar(self.settings.ball_speed, angle),
        );

        log::info!(
            "Level {} '{}' loaded: {} bricks, {} to clear",
            self.level_index + 1,
            name,
            self.bricks.len(),
            self.bricks.destructible_count()
        );
        self.events.push(GameEvent::LevelLoaded {
            index: self.level_index,
            name,
        });
        self.phase = GamePhase::Playing;
        Ok(())
    }

    /// Put the ball back at the spawn point with the fixed launch velocity
    pub fn respawn_ball(&mut self) {
        let (spawn, vel) = (self.settings.spawn_point(), self.settings.launch_velocity());
        self.ball.respawn(spawn, vel);
    }

    /// Take all events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Ball speed, for HUD/debug display
    pub fn ball_speed(&self) -> f32 {
        self.ball.vel.magnitude()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> BrickGeometry {
        BrickGeometry::from_settings(&Settings::default())
    }

    fn grid_group() -> BrickGroup {
        let book = LayoutBook::builtin();
        BrickGroup::from_layout(book.find("grid").unwrap(), &geometry()).unwrap()
    }

    #[test]
    fn test_group_from_layout_positions() {
        let group = grid_group();
        assert_eq!(group.len(), 22);
        assert_eq!(group.destructible_count(), 22);
        assert_eq!(group.score(), 0);

        let second_row = group.position((1, 1)).unwrap();
        let rect = group.get(second_row).unwrap().rect;
        assert_eq!(rect.origin, Vec2::new(32.0, 32.0 + 16.0));
        assert!(!group.contains((0, 1)));
    }

    #[test]
    fn test_group_from_count_wraps_rows() {
        let group = BrickGroup::from_count(11, &geometry()).unwrap();
        assert_eq!(group.len(), 11);
        assert_eq!(group.bricks()[9].cell, (0, 1));
        assert_eq!(group.destructible_count(), 11);
    }

    #[test]
    fn test_concrete_excluded_from_clear_target() {
        let layout = LevelLayout::new("mixed", vec![vec![2, 1, 0, 0, 0, 0, 0, 1, 2]]).unwrap();
        let group = BrickGroup::from_layout(&layout, &geometry()).unwrap();
        assert_eq!(group.len(), 4);
        assert_eq!(group.destructible_count(), 2);
    }

    #[test]
    fn test_standard_brick_destroyed_on_hit() {
        let mut group = grid_group();
        // Just under the middle of brick (4, 2), moving up
        let rect = group.bricks()[group.position((4, 2)).unwrap()].rect;
        let start = Vec2::new(rect.center().x, rect.corner2().y + 6.0);
        let mut ball = Ball::new(start, 8.0, Vec2::new(0.0, -200.0)).unwrap();

        let hits = group.update(&mut ball, CollisionPolicy::NearestOnly, 1e-4);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].cell, (4, 2));
        assert_eq!(hits[0].contact, ContactKind::HorizontalFace);
        assert!(hits[0].destroyed);
        assert_eq!(group.score(), 1);
        assert!(group.get(hits[0].index).is_none());
        assert_eq!(ball.vel, Vec2::new(0.0, 200.0));
        assert!((ball.pos().y - (rect.corner2().y + 8.0)).abs() < 1e-4);
    }

    #[test]
    fn test_concrete_brick_survives_hit() {
        let layout = LevelLayout::new("wall", vec![vec![2; 9]]).unwrap();
        let mut group = BrickGroup::from_layout(&layout, &geometry()).unwrap();
        let mut ball = Ball::new(Vec2::new(48.0, 52.0), 8.0, Vec2::new(0.0, -100.0)).unwrap();

        let hits = group.update(&mut ball, CollisionPolicy::NearestOnly, 1e-4);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].kind, BrickKind::Concrete);
        assert!(!hits[0].destroyed);
        assert_eq!(group.live_bricks().count(), 9);
        assert_eq!(ball.vel.y, 100.0);
        assert!(group.is_cleared());
    }

    #[test]
    fn test_nearest_only_resolves_one_brick() {
        // Ball straddling the seam between bricks (3, 2) and (4, 2)
        let mut group = grid_group();
        let seam_x = 4.0 * 32.0;
        let mut ball = Ball::new(Vec2::new(seam_x - 1.0, 86.0), 8.0, Vec2::new(0.0, -100.0)).unwrap();

        let hits = group.update(&mut ball, CollisionPolicy::NearestOnly, 1e-4);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].cell, (3, 2));
        assert_eq!(group.score(), 1);
    }

    #[test]
    fn test_all_overlapping_retests_after_pushout() {
        let mut group = grid_group();
        let seam_x = 4.0 * 32.0;
        let mut ball = Ball::new(Vec2::new(seam_x - 1.0, 86.0), 8.0, Vec2::new(0.0, -100.0)).unwrap();

        // The first push-out clears the second brick as well
        let hits = group.update(&mut ball, CollisionPolicy::AllOverlapping, 1e-4);
        assert_eq!(hits.len(), 1);
        assert_eq!(ball.vel.y, 100.0);

        // Wedged in the empty cell (0, 1): side of (1, 1) and underside of
        // (0, 0) both still overlap after the first push-out
        let mut group = grid_group();
        let mut ball = Ball::new(Vec2::new(26.0, 55.0), 8.0, Vec2::new(100.0, -100.0)).unwrap();
        let hits = group.update(&mut ball, CollisionPolicy::AllOverlapping, 1e-4);
        let cells: Vec<_> = hits.iter().map(|h| h.cell).collect();
        assert_eq!(cells, [(1, 1), (0, 0)]);
        assert!(hits.iter().all(|h| h.destroyed));
        assert_eq!(ball.vel, Vec2::new(-100.0, 100.0));
        assert_eq!(group.score(), 2);
    }

    #[test]
    fn test_nearest_only_in_pocket_hits_side_first() {
        let mut group = grid_group();
        let mut ball = Ball::new(Vec2::new(26.0, 55.0), 8.0, Vec2::new(100.0, -100.0)).unwrap();
        let hits = group.update(&mut ball, CollisionPolicy::NearestOnly, 1e-4);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].contact, ContactKind::VerticalFace);
        assert_eq!(ball.vel, Vec2::new(-100.0, -100.0));
    }

    #[test]
    fn test_remove_adjusts_counts() {
        let mut group = grid_group();
        assert!(group.remove((0, 0)).is_some());
        assert_eq!(group.destructible_count(), 21);
        assert!(group.remove((0, 0)).is_none());
    }

    #[test]
    fn test_remove_destroyed_brick_added_late() {
        let geometry = geometry();
        let mut group = BrickGroup::from_count(1, &geometry).unwrap();
        let mut brick = Brick::new(geometry.cell_rect(5, 5).unwrap(), BrickKind::Standard, (5, 5));
        brick.destroyed = true;

        group.add(brick);
        assert_eq!(group.destructible_count(), 2);
        assert_eq!(group.score(), 1);

        assert!(group.remove((5, 5)).is_some());
        assert_eq!(group.destructible_count(), 1);
        assert_eq!(group.score(), 0);
        assert!(!group.is_cleared());
    }

    #[test]
    fn test_ball_guard_velocity() {
        let mut ball = Ball::new(Vec2::ZERO, 8.0, Vec2::new(f32::NAN, 1.0)).unwrap();
        assert!(ball.guard_velocity(Vec2::new(0.0, 100.0)));
        assert_eq!(ball.vel, Vec2::new(0.0, 100.0));
        assert!(!ball.guard_velocity(Vec2::new(0.0, 5.0)));
    }

    #[test]
    fn test_paddle_clamped_to_screen() {
        let mut paddle = Paddle::new(144.0, 464.0, 64.0, 8.0).unwrap();
        paddle.move_to(-50.0, 0.0, 288.0, 1.0 / 60.0);
        assert_eq!(paddle.rect.origin.x, 0.0);
        assert!(paddle.vel.x < 0.0);

        paddle.steer(1.0, 360.0, 0.0, 288.0, 1.0);
        assert_eq!(paddle.rect.origin.x, 288.0 - 64.0);
    }

    #[test]
    fn test_session_starts_loading() {
        let session = GameSession::with_defaults();
        assert_eq!(session.phase, GamePhase::Loading);
        assert_eq!(session.current_layout().name, "grid");
    }

    #[test]
    fn test_load_level_is_deterministic() {
        let mut a = GameSession::with_defaults();
        let mut b = GameSession::with_defaults();
        a.load_level().unwrap();
        b.load_level().unwrap();
        assert_eq!(a.phase, GamePhase::Playing);
        assert_eq!(a.ball.vel, b.ball.vel);
        assert!(a.ball.vel.y > 0.0);
        assert_eq!(a.bricks.destructible_count(), 22);
        assert_eq!(
            a.drain_events(),
            vec![GameEvent::LevelLoaded {
                index: 0,
                name: "grid".into()
            }]
        );
    }
}
