//! Domain models for consultations and the prescriptions they carry.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{AppointmentId, ConsultationId};
use crate::domain::ClinicError;

/// One priced line of a prescription
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrescriptionItem {
    pub name: String,
    pub price: f64,
}

impl PrescriptionItem {
    /// Build an item, rejecting blank names and negative or non-finite prices
    pub fn new(name: impl Into<String>, price: f64) -> Result<Self, ClinicError> {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(ClinicError::InvalidItemFormat("item name cannot be empty".to_string()));
        }
        if !price.is_finite() || price < 0.0 {
            return Err(ClinicError::InvalidItemFormat(format!(
                "price for {} must be a non-negative number, got {}",
                name, price
            )));
        }
        Ok(Self {
            name: name.to_string(),
            price,
        })
    }
}

/// Parses the `name,price` line format, e.g. `Aspirin,3.0`
impl FromStr for PrescriptionItem {
    type Err = ClinicError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = line.trim().split(',').collect();
        if parts.len() != 2 {
            return Err(ClinicError::InvalidItemFormat(format!(
                "expected `name,price`, got {:?}",
                line
            )));
        }

        let price: f64 = parts[1]
            .trim()
            .parse()
            .map_err(|_| ClinicError::InvalidItemFormat(format!("invalid price {:?}", parts[1].trim())))?;

        Self::new(parts[0], price)
    }
}

/// Ordered list of prescribed items
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Prescription {
    items: Vec<PrescriptionItem>,
}

impl Prescription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&mut self, item: PrescriptionItem) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[PrescriptionItem] {
        &self.items
    }

    pub fn total_price(&self) -> f64 {
        self.items.iter().map(|item| item.price).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consultation {
    pub id: ConsultationId,
    pub appointment_id: AppointmentId,
    pub prescription: Prescription,
    pub consultation_fee: f64,
}

impl Consultation {
    /// Fee plus prescription cost, before tax
    pub fn subtotal(&self) -> f64 {
        self.consultation_fee + self.prescription.total_price()
    }
}

impl fmt::Display for Consultation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Consultation[id={}, appointmentId={}, consultationFee={}, items={}]",
            self.id,
            self.appointment_id,
            self.consultation_fee,
            self.prescription.items().len()
        )
    }
}
