// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.
//!
//! Field names are pinned to the wire names the deployed web client wrote
//! (`nombre`, `miembros`, `actividades`, ...) so documents stay
//! interoperable with the existing Firestore data.

pub mod group;
pub mod user;

pub use group::{Activity, ActivityStatus, Group, Note};
pub use user::{Friend, Profile, ProfileCard};
