use engine::{platform::WinitHost, ArenaConfig, EngineContext};

const CONFIG_PATH: &str = "arena.toml";

fn main() -> anyhow::Result<()> {
    // RUST_LOG overrides the level; stdout so the FPS line is visible next to the game.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .init();

    let cfg = ArenaConfig::load_or_default(CONFIG_PATH)?;
    log::info!(
        "{}x{} window, {} Hz simulation, speed {} px/ms",
        cfg.window.width,
        cfg.window.height,
        cfg.sim.fixed_hz,
        cfg.sim.player_speed
    );

    // ---- Engine context owns the window for the whole run ----
    let host = WinitHost::new()?;
    let mut ctx = EngineContext::init(host, &cfg).inspect_err(|e| log::error!("startup failed: {e}"))?;
    ctx.run();
    ctx.shutdown();

    Ok(())
}
