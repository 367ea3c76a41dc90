// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-path operations.
//!
//! Queries load rows through Diesel `Queryable` structs and convert them
//! to the serializable data models exported by this crate.

pub mod attendance;
pub mod departments;
pub mod employees;
pub mod leave;
pub mod reviews;
pub mod users;
