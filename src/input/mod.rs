pub mod target;
pub mod usb;
