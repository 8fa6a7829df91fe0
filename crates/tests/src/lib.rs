#[cfg(test)]
mod common;

#[cfg(test)]
mod role_access_tests;

#[cfg(test)]
mod booking_filter_tests;

#[cfg(test)]
mod client_filter_tests;

#[cfg(test)]
mod property_filter_tests;

#[cfg(test)]
mod status_label_tests;

#[cfg(test)]
mod component_render_tests;

#[cfg(test)]
mod serde_roundtrip_tests;
