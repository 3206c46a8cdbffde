use crate::dot::DotType;
use serde::{Deserialize, Serialize};

/// Dots tracked when every page fits on screen.
pub const MAX_VISIBLE_DOT_COUNT: usize = 9;
/// Shrinking dots at either end of a long row (one medium, one small).
pub const SMALL_DOT_RUN_LENGTH: usize = 2;
/// Full-size dots (normal or selected) between the two shrinking runs.
pub const NORMAL_AND_SELECTED_RUN_LENGTH: usize =
    MAX_VISIBLE_DOT_COUNT - 2 * SMALL_DOT_RUN_LENGTH;

pub const DEFAULT_NORMAL_RADIUS: f64 = 6.0;
pub const DEFAULT_SPACING: f64 = 8.0;
pub const DEFAULT_PADDING: f64 = 8.0;
pub const DEFAULT_MIN_VISIBLE_DOT_COUNT: usize = 2;

/// Raw indicator settings as they come out of a config file or the command
/// line. Every field is optional; [`IndicatorSettings::resolve`] fills the
/// gaps and repairs values that would break the radius ordering.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct IndicatorSettings {
    pub selected_radius: Option<f64>,
    pub normal_radius: Option<f64>,
    pub medium_radius: Option<f64>,
    pub small_radius: Option<f64>,
    /// Gap between two normal dots.
    pub spacing: Option<f64>,
    /// Horizontal padding on both sides of the row.
    pub padding: Option<f64>,
    pub min_visible_dots: Option<usize>,
}

impl IndicatorSettings {
    pub fn resolve(&self) -> IndicatorConfig {
        let normal = self
            .normal_radius
            .filter(|r| r.is_finite() && *r > 0.0)
            .unwrap_or(DEFAULT_NORMAL_RADIUS);

        let medium = self
            .medium_radius
            .filter(|r| r.is_finite() && *r > 0.0 && *r < normal)
            .unwrap_or(normal / 2.0);

        let small = self
            .small_radius
            .filter(|r| r.is_finite() && *r >= 0.0 && *r < medium)
            .unwrap_or(medium / 2.0);

        let selected = self
            .selected_radius
            .filter(|r| r.is_finite() && *r >= normal)
            .unwrap_or(normal * 1.25);

        IndicatorConfig {
            radius_selected: selected,
            radius_normal: normal,
            radius_medium: medium,
            radius_small: small,
            spacing: non_negative(self.spacing, DEFAULT_SPACING),
            padding: non_negative(self.padding, DEFAULT_PADDING),
            min_visible_dot_count: self
                .min_visible_dots
                .unwrap_or(DEFAULT_MIN_VISIBLE_DOT_COUNT)
                .max(1),
        }
    }
}

fn non_negative(value: Option<f64>, fallback: f64) -> f64 {
    value
        .filter(|v| v.is_finite() && *v >= 0.0)
        .unwrap_or(fallback)
}

/// Validated, immutable indicator configuration.
///
/// Always satisfies `selected >= normal > medium > small >= 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorConfig {
    radius_selected: f64,
    radius_normal: f64,
    radius_medium: f64,
    radius_small: f64,
    spacing: f64,
    padding: f64,
    min_visible_dot_count: usize,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        IndicatorSettings::default().resolve()
    }
}

impl IndicatorConfig {
    pub fn radius(&self, dot_type: DotType) -> f64 {
        match dot_type {
            DotType::Selected => self.radius_selected,
            DotType::Normal => self.radius_normal,
            DotType::Medium => self.radius_medium,
            DotType::Small => self.radius_small,
            DotType::None => 0.0,
        }
    }

    pub fn radius_selected(&self) -> f64 {
        self.radius_selected
    }

    pub fn radius_normal(&self) -> f64 {
        self.radius_normal
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Distance between the centres of two neighbouring slots.
    pub fn center_distance(&self) -> f64 {
        self.spacing + self.radius_normal
    }

    pub fn min_visible_dot_count(&self) -> usize {
        self.min_visible_dot_count
    }
}
