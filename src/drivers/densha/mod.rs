pub mod binding;
#[cfg(test)]
pub mod binding_test;
pub mod buttons;
#[cfg(test)]
pub mod buttons_test;
pub mod driver;
pub mod hid_report;
#[cfg(test)]
pub mod hid_report_test;
pub mod notch;
pub mod report_descriptor;
pub mod snapshot;
#[cfg(test)]
pub mod snapshot_test;
