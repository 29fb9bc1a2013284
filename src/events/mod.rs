//! Event types and observers used by the game.
//!
//! Events provide a decoupled way for systems to communicate: a system
//! triggers an event and the observers registered in `main` react to it.
//!
//! Submodules:
//! - [`collision`] – overlap notifications and the router that turns them
//!   into combat events
//! - [`combat`] – damage, deaths, exit and meeting progression
//! - [`dialogue`] – dialogue completion and timer-driven dialogue
//! - [`gamestate`] – state transition notifications for the engine lifecycle
//! - [`phase`] – phase machine transitions
//! - [`scene`] – scene teardown and enter
//! - [`switchdebug`] – toggle debug rendering on/off
//! - [`switchfullscreen`] – toggle fullscreen mode
//! - [`timer`] – timer expiration
pub mod collision;
pub mod combat;
pub mod dialogue;
pub mod gamestate;
pub mod phase;
pub mod scene;
pub mod switchdebug;
pub mod switchfullscreen;
pub mod timer;
