//! Brick Game entry point
//!
//! Native builds run a headless session with a paddle autopilot and log
//! what happens. A real front end drives `tick` and `render::frame` from
//! its own frame callback instead.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use brick_game::consts::{MAX_SUBSTEPS, SIM_DT};
    use brick_game::sim::{GameEvent, GameSession, TickInput, tick};
    use brick_game::{CollisionPolicy, LayoutBook, Settings};

    env_logger::init();
    log::info!("Brick Game (headless) starting...");

    let mut args = std::env::args().skip(1);
    let mut settings = args
        .next()
        .map(Settings::load)
        .unwrap_or_default();
    if let Ok(name) = std::env::var("BRICK_GAME_POLICY") {
        match CollisionPolicy::from_str(&name) {
            Some(policy) => settings.collision_policy = policy,
            None => log::warn!(
                "Unknown collision policy '{name}', keeping {}",
                settings.collision_policy.as_str()
            ),
        }
    }
    log::info!("Collision policy: {}", settings.collision_policy.as_str());
    let layouts = match args.next() {
        Some(path) => LayoutBook::load(&path).unwrap_or_else(|e| {
            log::warn!("Using built-in layouts ({path}: {e})");
            LayoutBook::builtin()
        }),
        None => LayoutBook::builtin(),
    };
    let seconds: u32 = std::env::var("BRICK_GAME_SECONDS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(120);

    let mut session = match GameSession::new(settings, layouts) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Invalid settings: {e}");
            std::process::exit(1);
        }
    };

    // Pretend the display runs at 30 Hz so every frame takes two substeps
    let frame_dt = 2.0 * SIM_DT;
    let frames = (seconds as f32 / frame_dt) as u32;
    let mut accumulator = 0.0;
    let mut balls_lost = 0u32;

    for _ in 0..frames {
        accumulator += frame_dt;
        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            // Autopilot: keep the paddle under the ball, slightly off center
            // so rebounds vary
            let input = TickInput {
                pointer_x: Some(session.ball.pos().x + session.settings.paddle_width * 0.2),
                ..Default::default()
            };
            tick(&mut session, &input, SIM_DT);
            accumulator -= SIM_DT;
            substeps += 1;

            for event in session.drain_events() {
                match event {
                    GameEvent::BallLost => balls_lost += 1,
                    GameEvent::BrickDestroyed { .. }
                    | GameEvent::ConcreteHit { .. }
                    | GameEvent::PaddleHit
                    | GameEvent::WallBounce => log::trace!("{event:?}"),
                    _ => log::info!("{event:?}"),
                }
            }
        }

        if brick_game::render::frame(&session).is_none() {
            log::debug!("Frame skipped while paused");
        }
    }

    log::info!(
        "Done after {} ticks: score {}, levels cleared {}, balls lost {}",
        session.time_ticks,
        session.total_score,
        session.levels_cleared,
        balls_lost
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The library is driven by the host page's frame callback
}
