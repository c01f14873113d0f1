//! USB Device subsystem - presents a HID touch digitizer to the host.
//!
//! The RP2040's built-in USB 1.1 Full-Speed controller is driven by
//! `embassy-usb`. We create a single-interface HID device whose report
//! descriptor comes from the encoder layout compiled into this build,
//! so enumeration and the report task can never disagree about the
//! wire format.
//!
//! The USB task services enumeration and endpoints; the report task
//! writes encoded digitizer reports to the IN endpoint.

pub mod hid_device;
