// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Behaviour of the public recurrence normalization API.

mod classify;
mod concurrency;
mod day_boundaries;
mod exception_dates;
mod week_rules;
