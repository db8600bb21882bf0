//! BMI and body-fat estimate.
//!
//! Category cut-offs leave `[24.9, 25)` and `[29.9, 30)` uncovered; values in
//! those gaps are reported as "Obese".

use serde::Serialize;

use crate::error::GymFlowError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            _ => None,
        }
    }

    fn body_fat_offset(&self) -> f64 {
        match self {
            Gender::Male => 16.2,
            Gender::Female => 5.4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyMetrics {
    pub bmi: f64,
    pub body_fat_percentage: f64,
    pub category: &'static str,
}

/// `weight` in kilograms, `height` in metres.
pub fn calculate(
    weight: f64,
    height: f64,
    age: i32,
    gender: &str,
) -> Result<BodyMetrics, GymFlowError> {
    if !height.is_finite() || !weight.is_finite() || height <= 0.0 || weight <= 0.0 || age <= 0 {
        return Err(GymFlowError::InvalidInput("Invalid input values!"));
    }

    let bmi = weight / height.powi(2);
    let gender = Gender::parse(gender).ok_or(GymFlowError::InvalidInput(
        "Invalid gender! Use 'male' or 'female'.",
    ))?;
    let body_fat = 1.20 * bmi + 0.23 * f64::from(age) - gender.body_fat_offset();

    Ok(BodyMetrics {
        bmi: round2(bmi),
        body_fat_percentage: round2(body_fat),
        category: category(bmi),
    })
}

fn category(bmi: f64) -> &'static str {
    if bmi < 18.5 {
        "Underweight"
    } else if (18.5..24.9).contains(&bmi) {
        "Normal weight"
    } else if (25.0..29.9).contains(&bmi) {
        "Overweight"
    } else {
        "Obese"
    }
}

/// Two decimals, exact halves to even.
fn round2(x: f64) -> f64 {
    (x * 100.0).round_ties_even() / 100.0
}
