// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Leif Rydenfalk – https://github.com/Leif-Rydenfalk/cell

pub mod error;
pub mod store;
pub mod user;

pub use error::StoreError;
pub use store::{fetch_all_users, UserStore, SELECT_USERS};
pub use user::User;
