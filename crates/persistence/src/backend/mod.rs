// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Database backend utilities.
//!
//! All domain queries and mutations are expressed in Diesel DSL and live in
//! `queries/` and `mutations/`. The code here is limited to connection
//! initialization, migrations, and `SQLite`-specific PRAGMA handling.

pub mod sqlite;
