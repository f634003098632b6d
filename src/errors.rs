// ABOUTME: Re-exports error types from stride-core for unified type identity
// ABOUTME: Ensures ApiError/ClientError are the same types across workspace crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

pub use stride_core::errors::*;
