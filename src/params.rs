// ABOUTME: Re-exports request parameter types from stride-core
// ABOUTME: Ensures filter and ordering types are shared across workspace crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

pub use stride_core::params::*;
