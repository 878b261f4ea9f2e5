/// CORRIDOR Project
/// `File` main.rs
/// `Description` Main project module
/// `Author` TioT2
/// `Last changed` 19.10.2026

use std::path::PathBuf;
use std::rc::Rc;

use anyhow::Context;

use corridor::backend::WindowBackend;
use corridor::input::{self, Input, Intents};
use corridor::timer::Timer;
use corridor::{Config, Game, Map};

/// Command line options
struct Options {
    map: Option<PathBuf>,
    config: Option<PathBuf>,
    version: bool,
} // struct Options

impl Options {
    /// Command line parsing function
    /// * `args` - arguments without program name
    fn parse<I: Iterator<Item = String>>(mut args: I) -> anyhow::Result<Self> {
        let mut options = Options { map: None, config: None, version: false };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-v" | "--version" => options.version = true,
                "-m" | "--map" => {
                    let path = args.next().filter(|path| !path.is_empty()).context("Invalid map path")?;
                    options.map = Some(PathBuf::from(path));
                }
                "-c" | "--config" => {
                    let path = args.next().filter(|path| !path.is_empty()).context("Invalid config path")?;
                    options.config = Some(PathBuf::from(path));
                }
                other => log::warn!("unknown argument {other}"),
            }
        }

        Ok(options)
    } // fn parse
} // impl Options

/// Application running function
fn run() -> anyhow::Result<()> {
    let options = Options::parse(std::env::args().skip(1))?;

    if options.version {
        println!("Version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut config = match &options.config {
        Some(path) => Config::load(path).with_context(|| format!("cannot load config {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(map) = options.map {
        config.map.path = map;
    }

    log::info!("Map: {}", config.map.path.display());
    let map = Map::load(&config.map.path).with_context(|| format!("cannot load map {}", config.map.path.display()))?;

    let event_loop = winit::event_loop::EventLoop::new().map_err(|err| anyhow::anyhow!("cannot create event loop: {err}"))?;
    let window = Rc::new(winit::window::WindowBuilder::new()
        .with_title(config.window.title.as_str())
        .with_resizable(false)
        .with_inner_size(winit::dpi::PhysicalSize::new(config.window.width, config.window.height))
        .build(&event_loop)
        .map_err(|err| anyhow::anyhow!("cannot create window: {err}"))?
    );

    let mut backend = WindowBackend::new(window.clone()).map_err(|err| anyhow::anyhow!("cannot create surface: {err}"))?;
    let mut timer = Timer::new(config.time_step_ms.as_duration());
    let mut game = Game::new(config, map, &mut backend).context("Error initializing raycaster engine.")?;
    let mut input = Input::new();

    event_loop.set_control_flow(winit::event_loop::ControlFlow::Poll);
    event_loop.run(move |event, target| {
        match event {
            winit::event::Event::WindowEvent { window_id, event } => if window.id() == window_id {
                match event {
                    winit::event::WindowEvent::CloseRequested => {
                        target.exit();
                    }
                    winit::event::WindowEvent::KeyboardInput { event, .. } => if let winit::keyboard::PhysicalKey::Code(code) = event.physical_key {
                        input.on_key_state_change(code, event.state == winit::event::ElementState::Pressed);
                    }
                    winit::event::WindowEvent::RedrawRequested => {
                        timer.response();

                        for trigger in input::collect_triggers(input.get_state()) {
                            if !game.trigger(trigger) {
                                target.exit();
                            }
                        }

                        let intents = Intents::from_state(input.get_state());
                        while timer.next_update() {
                            game.update(&intents);
                        }

                        if let Err(err) = game.render(&mut backend) {
                            log::warn!("cannot present frame: {err}");
                        }

                        input.clear_changed();
                    }
                    _ => {},
                }
            }
            winit::event::Event::AboutToWait => {
                window.request_redraw();
            }
            _ => {},
        }
    }).map_err(|err| anyhow::anyhow!("event loop failed: {err}"))
} // fn run

/// Main program function
fn main() {
    env_logger::init();

    if let Err(err) = run() {
        log::error!("{err:#}");
        eprintln!("{err:#}");
        std::process::exit(1);
    }
} // fn main


// file main.rs
