// ABOUTME: Conversion from command-line flags to Profile values
// ABOUTME: Enum flags are parsed leniently with documented fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriscan::models::{ActivityLevel, Gender, Goal, Profile};

use crate::{OptionalProfileArgs, ProfileArgs};

/// Build a profile from required flags
pub fn profile_from_args(args: &ProfileArgs) -> Profile {
    Profile {
        weight_kg: args.weight,
        height_cm: args.height,
        age_years: args.age,
        gender: Gender::from_str_lossy(&args.gender),
        goal: Goal::from_str_lossy(&args.goal),
        activity_level: ActivityLevel::from_str_lossy(&args.activity),
    }
}

/// Build a profile when weight, height, and age were all given
pub fn optional_profile_from_args(args: &OptionalProfileArgs) -> Option<Profile> {
    Some(Profile {
        weight_kg: args.weight?,
        height_cm: args.height?,
        age_years: args.age?,
        gender: Gender::from_str_lossy(&args.gender),
        goal: Goal::from_str_lossy(&args.goal),
        activity_level: ActivityLevel::from_str_lossy(&args.activity),
    })
}
