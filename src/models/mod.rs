// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model: crop regions, the upload form, and the session lifecycle.

pub mod crop;
pub mod form;
pub mod session;
