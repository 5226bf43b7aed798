#![warn(rust_2018_idioms)]

pub mod component;

pub use component::{COMPONENT_RTCP, COMPONENT_RTP, RTCIceComponent};
