use crate::domain::model::Doctor;
use serde::Serialize;
use std::fmt;

/// Display projection of a [`Doctor`], one result row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoctorCard {
    pub id: String,
    pub name: String,
    pub specialties: String,
    pub experience_years: String,
    pub clinic: String,
    pub fee: String,
    pub video_consult: bool,
    pub in_clinic: bool,
}

impl From<&Doctor> for DoctorCard {
    fn from(doctor: &Doctor) -> Self {
        let specialties = doctor
            .specialities
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            id: doctor.id.clone(),
            name: doctor.name.clone(),
            specialties,
            experience_years: doctor.experience.split(' ').next().unwrap_or_default().to_string(),
            clinic: format!("{}, {}", doctor.clinic.name, doctor.clinic.address.locality),
            fee: doctor.fees.clone(),
            video_consult: doctor.video_consult,
            in_clinic: doctor.in_clinic,
        }
    }
}

impl fmt::Display for DoctorCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} yrs exp. | {} | {}",
            self.name, self.specialties, self.experience_years, self.clinic, self.fee
        )
    }
}
