// Domain layer: models and ports (interfaces). No knowledge of HTTP, HTML or
// the filesystem lives here.

pub mod model;
pub mod ports;
