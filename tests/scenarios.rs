//! End-to-end physics and session scenarios

use brick_game::consts::SIM_DT;
use brick_game::sim::{
    AxisAlignedRect, Ball, BrickGeometry, BrickGroup, ContactKind, GameEvent, GamePhase,
    GameSession, TickInput, VectorExt, ball_rect_collision, collision_response, separate, tick,
};
use brick_game::{CollisionPolicy, LayoutBook, LevelLayout, Settings};
use glam::Vec2;
use proptest::prelude::*;

const EPS: f32 = 1e-4;

fn rect(x1: f32, y1: f32, x2: f32, y2: f32) -> AxisAlignedRect {
    AxisAlignedRect::new(Vec2::new(x1, y1), x2 - x1, y2 - y1).unwrap()
}

#[test]
fn ball_far_from_rect_does_not_collide() {
    let r = rect(10.0, 10.0, 20.0, 20.0);
    let result = ball_rect_collision(Vec2::ZERO, 5.0, &r, EPS);

    assert_eq!(result.point, Vec2::new(10.0, 10.0));
    assert!((result.distance_sq.sqrt() - 14.142_136).abs() < 1e-4);
    assert!(!result.hit);
}

#[test]
fn ball_over_top_face_bounces_and_is_pushed_out() {
    let r = rect(10.0, 10.0, 20.0, 20.0);
    let mut ball = Ball::new(Vec2::new(15.0, 9.0), 2.0, Vec2::new(1.0, 3.0)).unwrap();

    let result = ball.resolve_rect(&r, EPS);
    assert!(result.hit);
    assert_eq!(result.point, Vec2::new(15.0, 10.0));
    assert_eq!(result.kind, Some(ContactKind::HorizontalFace));
    assert_eq!(ball.vel, Vec2::new(1.0, -3.0));
    assert!((ball.pos().y - 8.0).abs() < 1e-5);
    assert_eq!(ball.pos().x, 15.0);
}

#[test]
fn reflection_off_45_degree_normal_swaps_and_negates() {
    let n = Vec2::new(std::f32::consts::FRAC_1_SQRT_2, std::f32::consts::FRAC_1_SQRT_2);
    let v = Vec2::new(3.0, 4.0).reflect_across(n);

    assert!((v - Vec2::new(-4.0, -3.0)).length() < 1e-4);
    assert!((v.magnitude() - 5.0).abs() < 1e-4);
}

#[test]
fn corner_contact_preserves_speed() {
    let r = rect(10.0, 10.0, 20.0, 20.0);
    // Off-diagonal approach to the top-left corner
    let center = Vec2::new(9.0, 8.8);
    let contact = ball_rect_collision(center, 2.0, &r, EPS);
    assert_eq!(contact.kind, Some(ContactKind::Corner));

    let v = Vec2::new(3.0, 4.0);
    let out = collision_response(v, &contact);
    assert!((out.length() - 5.0).abs() < 1e-4);

    let pushed = separate(center, &contact);
    assert!((r.closest_point(pushed).distance(pushed) - 2.0).abs() < 1e-4);
}

#[test]
fn pattern_layout_clears_exactly_once() {
    let layout = LevelLayout::new(
        "pattern",
        vec![
            vec![1; 9],
            vec![0, 1, 0, 1, 0, 1, 0, 1, 0],
            vec![1; 9],
        ],
    )
    .unwrap();
    assert_eq!(layout.destructible_count(), 22);

    let book = LayoutBook::new(vec![layout]).unwrap();
    let mut session = GameSession::new(Settings::default(), book).unwrap();
    tick(&mut session, &TickInput::default(), SIM_DT);
    assert_eq!(session.bricks.destructible_count(), 22);

    let targets: Vec<_> = session.bricks.bricks().iter().rev().map(|b| b.rect).collect();
    let mut events = Vec::new();
    for target in targets {
        session
            .ball
            .respawn(Vec2::new(target.center().x, target.corner2().y + 6.0), Vec2::ZERO);
        tick(&mut session, &TickInput::default(), SIM_DT);
        events.extend(session.drain_events());
    }
    for _ in 0..10 {
        tick(&mut session, &TickInput::default(), SIM_DT);
        events.extend(session.drain_events());
    }

    let destroyed = events
        .iter()
        .filter(|e| matches!(e, GameEvent::BrickDestroyed { .. }))
        .count();
    let cleared = events
        .iter()
        .filter(|e| matches!(e, GameEvent::LevelCleared { .. }))
        .count();
    assert_eq!(destroyed, 22);
    assert_eq!(cleared, 1);
    assert_eq!(session.phase, GamePhase::LevelCleared);
}

#[test]
fn ball_past_bottom_respawns_with_launch_velocity() {
    let mut session = GameSession::with_defaults();
    tick(&mut session, &TickInput::default(), SIM_DT);
    let before = (session.total_score, session.levels_cleared, session.level_index);

    session
        .ball
        .respawn(Vec2::new(60.0, session.settings.screen_height + 20.0), Vec2::new(50.0, 200.0));
    tick(&mut session, &TickInput::default(), SIM_DT);

    assert_eq!(session.ball.pos(), session.settings.spawn_point());
    assert_eq!(session.ball.vel, session.settings.launch_velocity());
    assert_eq!(
        (session.total_score, session.levels_cleared, session.level_index),
        before
    );
}

#[test]
fn all_overlapping_policy_is_configurable() {
    let settings = Settings::from_json(r#"{ "collision_policy": "AllOverlapping" }"#).unwrap();
    assert_eq!(settings.collision_policy, CollisionPolicy::AllOverlapping);

    let book = LayoutBook::builtin();
    let geometry = BrickGeometry::from_settings(&settings);
    let mut group = BrickGroup::from_layout(book.get(0), &geometry).unwrap();
    let mut ball = Ball::new(Vec2::new(26.0, 55.0), 8.0, Vec2::new(100.0, -100.0)).unwrap();
    let hits = group.update(&mut ball, settings.collision_policy, settings.contact_epsilon);
    assert_eq!(hits.len(), 2);
}

#[test]
fn long_autopilot_run_stays_finite_and_in_bounds() {
    let mut session = GameSession::with_defaults();
    for _ in 0..20_000 {
        let input = TickInput {
            pointer_x: Some(session.ball.pos().x + session.settings.paddle_width * 0.2),
            ..Default::default()
        };
        tick(&mut session, &input, SIM_DT);
        let pos = session.ball.pos();
        assert!(pos.is_finite() && session.ball.vel.is_finite());
        assert!(pos.x >= 0.0 && pos.x <= session.settings.screen_width);
        assert!(pos.y + session.ball.radius() >= session.settings.hud_height);
    }
    assert!(session.total_score > 0);
}

proptest! {
    #[test]
    fn reflection_preserves_magnitude(
        vx in -500.0f32..500.0,
        vy in -500.0f32..500.0,
        angle in 0.0f32..std::f32::consts::TAU,
    ) {
        let v = Vec2::new(vx, vy);
        let n = Vec2::from_angle(angle);
        let r = v.reflect_across(n);
        prop_assert!((r.length() - v.length()).abs() <= 1e-3 * v.length().max(1.0));
    }

    #[test]
    fn tangent_or_farther_never_collides(
        angle in 0.0f32..std::f32::consts::TAU,
        extra in 0.0f32..50.0,
    ) {
        // Ball around the top-left corner at distance >= r
        let r = rect(100.0, 100.0, 140.0, 120.0);
        let radius = 8.0;
        let corner = Vec2::new(100.0, 100.0);
        let dir = Vec2::new(-angle.cos().abs(), -angle.sin().abs()).normalize_or(Vec2::NEG_Y);
        let center = corner + dir * (radius + 0.01 + extra);
        prop_assert!(!ball_rect_collision(center, radius, &r, EPS).hit);
    }

    #[test]
    fn contact_always_separates_ball(
        x in 80.0f32..160.0,
        y in 85.0f32..135.0,
        vx in -300.0f32..300.0,
        vy in -300.0f32..300.0,
    ) {
        let r = rect(100.0, 100.0, 140.0, 120.0);
        let mut ball = Ball::new(Vec2::new(x, y), 8.0, Vec2::new(vx, vy)).unwrap();
        let result = ball.resolve_rect(&r, EPS);
        if result.hit {
            let gap = r.closest_point(ball.pos()).distance(ball.pos());
            prop_assert!(gap >= 8.0 - 1e-3);
        }
    }
}
