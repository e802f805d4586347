// Domain layer: wire model, ports (interfaces) and the menu lookup service.

pub mod model;
pub mod ports;

pub mod services;
