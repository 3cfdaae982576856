// Application layer: front ends built on the controller.

pub mod terminal;
