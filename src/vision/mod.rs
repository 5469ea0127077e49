// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Image processing stages: adjustment, sharpness gate, classification
//! and annotation.

pub mod adjust;
pub mod annotator;
pub mod classifier;
pub mod fer;
pub mod quality;
