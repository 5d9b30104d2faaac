use anyhow::Result;
use baton::input::backends::KeyboardMouseState;
use baton::input::{ActiveDevice, Player, PlayerConfig};
use log::{debug, info};
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

#[cfg(feature = "gamepad")]
use baton::input::{backends::GamepadRegistry, Routed};

/// Controls for the demo player
fn demo_config() -> PlayerConfig {
    PlayerConfig::new()
        .control("left", ["key:left", "key:a", "axis:leftx-", "button:dpleft"])
        .control("right", ["key:right", "key:d", "axis:leftx+", "button:dpright"])
        .control("up", ["key:up", "key:w", "axis:lefty-", "button:dpup"])
        .control("down", ["key:down", "key:s", "axis:lefty+", "button:dpdown"])
        .control("action", ["key:x", "mouse:1", "button:a"])
        .control("menu", ["key:escape", "button:start"])
        .pair("move", ["left", "right", "up", "down"])
        .deadzone(0.3)
}

/// Log what changed for the player this frame
fn report(player: &Player, last_device: &mut ActiveDevice) {
    for name in player.action_names() {
        if player.pressed(name).unwrap_or(false) {
            info!("{} pressed", name);
        }
        if player.released(name).unwrap_or(false) {
            info!("{} released", name);
        }
    }

    if let Ok(true) = player.down("move") {
        if let Ok((x, y)) = player.get("move") {
            debug!("move = ({:.2}, {:.2})", x, y);
        }
    }

    if player.active_device() != *last_device {
        *last_device = player.active_device();
        info!("Active device: {}", last_device);
    }
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting baton input demo...");

    let config = demo_config();

    #[cfg(feature = "gamepad")]
    let mut gamepads = GamepadRegistry::new()
        .map_err(|e| anyhow::anyhow!("Failed to initialize gamepads: {}", e))?;
    #[cfg(feature = "gamepad")]
    let config = match gamepads.first_connected() {
        Some(pad) => {
            info!("Using {}", pad);
            config.joystick(pad)
        }
        None => config,
    };

    let mut player = Player::new(config)?;
    let mut keyboard = KeyboardMouseState::new();
    let mut last_device = player.active_device();

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("baton input demo")
        .with_inner_size(winit::dpi::LogicalSize::new(640, 360))
        .build(&event_loop)?;

    info!("Window created, press keys or use a gamepad");

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    info!("Close requested, shutting down...");
                    elwt.exit();
                }
                WindowEvent::KeyboardInput { event, .. } => keyboard.process_key_event(&event),
                WindowEvent::MouseInput { state, button, .. } => {
                    keyboard.process_mouse_button(button, state)
                }
                WindowEvent::Focused(false) => {
                    // Release events won't arrive while unfocused
                    keyboard.clear();
                    player.reset();
                }
                WindowEvent::RedrawRequested => {
                    #[cfg(feature = "gamepad")]
                    {
                        gamepads.poll();
                        player.update(&Routed::new(&keyboard, &gamepads));
                    }
                    #[cfg(not(feature = "gamepad"))]
                    player.update(&keyboard);

                    report(&player, &mut last_device);
                }
                _ => {}
            },
            Event::AboutToWait => {
                // One input update per frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
