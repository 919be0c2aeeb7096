// Domain layer: the value types shared by the core functions.

pub mod model;
