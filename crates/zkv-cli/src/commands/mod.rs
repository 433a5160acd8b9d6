// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

pub mod config;
pub mod info;
pub mod invoke;
pub mod status;
pub mod verify;
pub mod verify_dir;
