// ABOUTME: Re-exports the decode-at-the-edge validation entry points
// ABOUTME: Ensures the trust boundary is the same code across workspace crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

pub use stride_core::validate::*;
