// Domain layer: core models and ports (interfaces). No knowledge of reqwest,
// clap or toml beyond serde on the wire types.

pub mod model;
pub mod ports;
