//! Opens a GL ES 2.0 window and logs every engine event.
//!
//! Run with `RUST_LOG=debug cargo run --example basic_device`.
//! Press Escape to quit.

use aetheric_device::prelude::*;
use crossbeam_channel::unbounded;
use log::info;

fn main() -> Result<(), DeviceError> {
    env_logger::init();

    let mut device = DeviceBuilder::new()
        .with_window_size(1024, 768)
        .with_anti_alias(4)
        .with_vsync(true)
        .with_title("Aetheric device demo")
        .build()?;

    device.set_resizable(true);

    let (tx, rx) = unbounded::<Event>();
    device.set_event_receiver(Box::new(tx));

    match device.activate_joysticks() {
        Ok(sticks) => info!("{} joysticks active", sticks.len()),
        Err(e) => info!("No joysticks: {}", e),
    }

    let modes = device.video_mode_list();
    info!(
        "Desktop {:?} @ {} bit, {} modes",
        modes.desktop_resolution(),
        modes.desktop_depth(),
        modes.mode_count()
    );

    let mut last_fps_time = device.timer().real_time();
    let mut frames = 0u32;

    while device.run() {
        for event in rx.try_iter() {
            match event {
                Event::Key(KeyInput { key: KeyCode::Escape, pressed_down: true, .. }) => {
                    device.close_device();
                }
                Event::Mouse(MouseInput { kind: MouseEventKind::Moved, .. }) => {}
                other => info!("{:?}", other),
            }
        }

        if !device.is_window_active() {
            device.sleep(16, true);
            continue;
        }

        if let Some(context) = device.context_manager() {
            context.swap_buffers()?;
        }

        frames += 1;
        let now = device.timer().real_time();
        if now.wrapping_sub(last_fps_time) >= 1000 {
            device.set_window_caption(&format!("Aetheric device demo ({} fps)", frames));
            frames = 0;
            last_fps_time = now;
        }
    }

    Ok(())
}
