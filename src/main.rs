//! Brick Pong entry point
//!
//! Drives the game controller with a scripted session against the headless
//! scene and prints a summary.
//!
//! Usage: `brick-pong [SCRIPT.json] [--settings FILE] [--seed N]`

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use anyhow::{Context, bail};

    use brick_pong::Settings;
    use brick_pong::replay;
    use brick_pong::sim::{GameController, HeadlessScene};

    struct Args {
        script: Option<PathBuf>,
        settings: Option<PathBuf>,
        seed: Option<u64>,
    }

    fn parse_args() -> anyhow::Result<Args> {
        let mut args = Args {
            script: None,
            settings: None,
            seed: None,
        };

        let mut iter = std::env::args().skip(1);
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--settings" => {
                    let path = iter.next().context("--settings needs a file")?;
                    args.settings = Some(PathBuf::from(path));
                }
                "--seed" => {
                    let value = iter.next().context("--seed needs a number")?;
                    let seed = value
                        .parse()
                        .with_context(|| format!("invalid seed `{}`", value))?;
                    args.seed = Some(seed);
                }
                flag if flag.starts_with("--") => bail!("unknown option `{}`", flag),
                path => {
                    if args.script.is_some() {
                        bail!("only one script may be given");
                    }
                    args.script = Some(PathBuf::from(path));
                }
            }
        }
        Ok(args)
    }

    fn clock_seed() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    }

    pub fn run() -> anyhow::Result<()> {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        log::info!("Brick Pong starting...");

        let args = parse_args()?;

        let settings = match &args.settings {
            Some(path) => Settings::load(path)
                .with_context(|| format!("loading settings from {}", path.display()))?,
            None => Settings::default(),
        };

        let seed = args.seed.unwrap_or_else(clock_seed);
        let scene = HeadlessScene::standard(&settings);
        let mut controller =
            GameController::initialize(scene, settings, seed).context("setting up the scene")?;

        let steps = match &args.script {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("reading script {}", path.display()))?;
                replay::parse_script(&json)
                    .with_context(|| format!("parsing script {}", path.display()))?
            }
            None => {
                log::info!("No script given, running the demo session");
                let state = controller.state();
                replay::demo_script(state.number_of_bricks, state.paddle.home)
            }
        };

        let summary = replay::run(&mut controller, &steps);
        log::info!(
            "Session finished: {} won, {} lost, score {}",
            summary.rounds_won,
            summary.rounds_lost,
            summary.score
        );
        println!("{}", serde_json::to_string_pretty(&summary)?);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web builds embed the library in a host page; there is no binary entry
}
