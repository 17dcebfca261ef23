//! SenShop concept tooling: a small server for the project slide deck and a
//! one-shot populator that stands up the concept board on Miro.

pub mod content;
pub mod miro;
pub mod populate;
pub mod slides;
