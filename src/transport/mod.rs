// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

#[cfg(test)]
pub mod mock_transport;
pub mod reqwest_transport;
pub mod traits;
