//! Descriptor tables for every intercepted command, grouped by API area.

mod command;
mod descriptor;
mod device;
mod image;
mod instance;
mod memory;
mod physical_device;
mod pipeline;
mod renderpass;
mod sync;
mod wsi;

use crate::entry_point::EntryPoint;

/// Every descriptor, unsealed, in area order.
pub fn all() -> Vec<EntryPoint> {
    [
        instance::entry_points(),
        physical_device::entry_points(),
        device::entry_points(),
        memory::entry_points(),
        image::entry_points(),
        sync::entry_points(),
        pipeline::entry_points(),
        descriptor::entry_points(),
        renderpass::entry_points(),
        command::entry_points(),
        wsi::entry_points(),
    ]
    .into_iter()
    .flatten()
    .collect()
}
