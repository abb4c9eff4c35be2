// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::Weights;

/// Describes how to derive per-metric [Weights] from a base distance
/// and a road category.
///
/// A category is matched against all [road classes](RoadClass) in order,
/// and the first exact name match decides the assumed cruising speed and
/// fuel consumption. Categories without a match fall back to
/// [Profile::default_speed] and [Profile::default_fuel_rate].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Profile<'a> {
    /// Human readable name of the weighting profile.
    pub name: &'a str,

    /// Known road categories. Matched by exact name, first match wins.
    pub classes: &'a [RoadClass<'a>],

    /// Cruising speed assumed for unknown road categories, in km/h.
    /// Must be finite and positive.
    pub default_speed: f64,

    /// Fuel consumption assumed for unknown road categories, in litres
    /// per kilometer. Must be finite and not less than zero.
    pub default_fuel_rate: f64,
}

/// Speed and fuel consumption figures for a single road category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoadClass<'a> {
    /// Road category name, e.g. "highway" or "street".
    pub name: &'a str,

    /// Cruising speed, in km/h. Must be finite and positive.
    pub speed: f64,

    /// Fuel consumption, in litres per kilometer.
    /// Must be finite and not less than zero.
    pub fuel_rate: f64,
}

impl Profile<'_> {
    /// Derives all three metric weights from a base distance (in kilometers)
    /// and a road category: `time = distance / speed(road_type)` and
    /// `fuel = distance * fuel_rate(road_type)`.
    pub fn derive_weights(&self, distance_km: f64, road_type: &str) -> Weights {
        Weights {
            distance: distance_km,
            time: distance_km / self.speed(road_type),
            fuel: distance_km * self.fuel_rate(road_type),
        }
    }

    /// Returns the cruising speed (km/h) for a road category,
    /// falling back to [Profile::default_speed].
    pub fn speed(&self, road_type: &str) -> f64 {
        self.class(road_type)
            .map(|c| c.speed)
            .unwrap_or(self.default_speed)
    }

    /// Returns the fuel consumption (l/km) for a road category,
    /// falling back to [Profile::default_fuel_rate].
    pub fn fuel_rate(&self, road_type: &str) -> f64 {
        self.class(road_type)
            .map(|c| c.fuel_rate)
            .unwrap_or(self.default_fuel_rate)
    }

    /// The highest speed assumed by any road category, including the
    /// default. An upper bound on how fast any derived edge can be covered.
    pub fn max_speed(&self) -> f64 {
        self.classes
            .iter()
            .fold(self.default_speed, |acc, c| acc.max(c.speed))
    }

    /// The lowest fuel consumption assumed by any road category, including
    /// the default. A lower bound on how cheaply any derived edge can be
    /// covered.
    pub fn min_fuel_rate(&self) -> f64 {
        self.classes
            .iter()
            .fold(self.default_fuel_rate, |acc, c| acc.min(c.fuel_rate))
    }

    fn class(&self, road_type: &str) -> Option<&RoadClass<'_>> {
        self.classes.iter().find(|c| c.name == road_type)
    }
}

/// Default weighting [Profile] for cars.
pub const CAR_PROFILE: Profile = Profile {
    name: "car",
    classes: &[
        RoadClass {
            name: "highway",
            speed: 100.0,
            fuel_rate: 0.05,
        },
        RoadClass {
            name: "street",
            speed: 30.0,
            fuel_rate: 0.10,
        },
        RoadClass {
            name: "rural",
            speed: 50.0,
            fuel_rate: 0.07,
        },
    ],
    default_speed: 40.0,
    default_fuel_rate: 0.08,
};
