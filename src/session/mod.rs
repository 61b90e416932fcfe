//! Driving effects against a sink: single transitions ([`Player`]) and scripted sequences
//! ([`ShowConfig`]).

pub(crate) mod player;
pub(crate) mod show;
