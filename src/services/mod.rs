// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - the synchronization logic between screens and stores.

pub mod activities;
pub mod friends;
pub mod groups;
pub mod reader;

pub use activities::NewActivity;
pub use friends::FriendBook;
pub use groups::NewGroup;
pub use reader::ActivityOverview;
