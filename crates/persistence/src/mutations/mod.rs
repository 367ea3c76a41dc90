// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Write-path operations.
//!
//! Mutations that touch more than one table run inside a Diesel
//! transaction so partial writes never become visible.

pub mod attendance;
pub mod departments;
pub mod employees;
pub mod leave;
pub mod reviews;
pub mod users;
