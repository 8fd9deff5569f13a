//! Value objects - Immutable objects defined by their attributes

mod capabilities;
mod names;
mod vitals;

pub use capabilities::{
    TagSet, Weakness, COMMUNICATION_DEVICE, EMERGENCY_BEACON, FLIGHT, HACKING, HACKING_DEVICE,
    RESCUE, SCANNER, STARTER_GADGETS, TECHNOLOGY, TECH_POWERS,
};
pub use names::{Alias, PersonName};
pub use vitals::{Age, Gauge};
