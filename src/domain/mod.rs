// Domain layer: page context, fallbacks and ports. No HTML or HTTP code here.

pub mod model;
pub mod ports;
