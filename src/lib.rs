//=========================================================================
// Aetheric Device — Library Root
//
// Winit-backed platform device for a 3D engine: window lifecycle, input
// translation and an optional OpenGL / OpenGL ES context.
//
// Responsibilities:
// - Expose the engine-facing device interface (`core::Device`)
// - Provide the winit implementation (`platform::WinitDevice`)
// - Keep construction behind a single builder (`DeviceBuilder`)
//
// Typical usage:
// ```no_run
// use aetheric_device::prelude::*;
//
// fn main() -> Result<(), DeviceError> {
//     let mut device = DeviceBuilder::new().with_title("Hello").build()?;
//     while device.run() {}
//     Ok(())
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the platform-independent event model, timer, video mode
// list and the `Device` trait. `platform` holds the winit and glutin
// implementation.
//
pub mod core;
pub mod platform;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------

mod builder;

//--- Public Exports ------------------------------------------------------

pub use builder::DeviceBuilder;
pub use platform::WinitDevice;
