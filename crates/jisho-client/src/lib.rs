mod client;

pub use client::{JishoClient, decode_response};
