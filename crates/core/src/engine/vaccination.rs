use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::calendar::add_weeks;
use crate::domain::vaccination::{
    Lifestyle, NextAppointment, Region, VaccinationInput, VaccinationResult, VaccineAppointment,
    VaccineType,
};
use crate::errors::InvalidInputError;

#[derive(Clone, Copy, Debug)]
struct Dose {
    week: u32,
    vaccines: &'static [&'static str],
    vaccine_type: VaccineType,
    cost: i64,
}

const CORE_SERIES: &[Dose] = &[
    Dose {
        week: 6,
        vaccines: &["DHPP (Distemper, Hepatitis, Parvovirus, Parainfluenza) - 1st dose"],
        vaccine_type: VaccineType::Core,
        cost: 25,
    },
    Dose { week: 9, vaccines: &["DHPP - 2nd dose"], vaccine_type: VaccineType::Core, cost: 25 },
    Dose {
        week: 12,
        vaccines: &["DHPP - 3rd dose", "Rabies - 1st dose"],
        vaccine_type: VaccineType::Core,
        cost: 45,
    },
    Dose {
        week: 16,
        vaccines: &["DHPP - 4th dose (final puppy series)"],
        vaccine_type: VaccineType::Core,
        cost: 25,
    },
];

const BORDETELLA: &[Dose] = &[Dose {
    week: 12,
    vaccines: &["Bordetella (Kennel Cough)"],
    vaccine_type: VaccineType::NonCore,
    cost: 20,
}];

const LYME_SERIES: &[Dose] = &[
    Dose {
        week: 12,
        vaccines: &["Lyme Disease - 1st dose"],
        vaccine_type: VaccineType::NonCore,
        cost: 30,
    },
    Dose {
        week: 16,
        vaccines: &["Lyme Disease - 2nd dose"],
        vaccine_type: VaccineType::NonCore,
        cost: 30,
    },
];

const LEPTOSPIROSIS_SERIES: &[Dose] = &[
    Dose {
        week: 12,
        vaccines: &["Leptospirosis - 1st dose"],
        vaccine_type: VaccineType::NonCore,
        cost: 25,
    },
    Dose {
        week: 16,
        vaccines: &["Leptospirosis - 2nd dose"],
        vaccine_type: VaccineType::NonCore,
        cost: 25,
    },
];

/// Non-core series and the exposure that triggers each, in schedule order.
fn non_core_series(input: &VaccinationInput) -> Vec<&'static [Dose]> {
    let mut series = Vec::new();
    if matches!(input.lifestyle, Lifestyle::Active | Lifestyle::Social) {
        series.push(BORDETELLA);
    }
    if matches!(input.region, Region::Midwest | Region::Northeast) {
        series.push(LYME_SERIES);
    }
    if input.lifestyle == Lifestyle::Outdoor || input.region == Region::Southwest {
        series.push(LEPTOSPIROSIS_SERIES);
    }
    series
}

pub fn compute_vaccination(
    input: &VaccinationInput,
    today: NaiveDate,
) -> Result<VaccinationResult, InvalidInputError> {
    let mut doses: Vec<Dose> = CORE_SERIES.to_vec();
    for series in non_core_series(input) {
        doses.extend_from_slice(series);
    }
    doses.sort_by_key(|dose| dose.week);

    let mut schedule: Vec<VaccineAppointment> = Vec::new();
    for dose in doses {
        match schedule.last_mut() {
            Some(appointment) if appointment.week == dose.week => {
                appointment.vaccines.extend(dose.vaccines.iter().map(|name| (*name).to_string()));
                appointment.cost += Decimal::from(dose.cost);
                if dose.vaccine_type == VaccineType::Core {
                    appointment.vaccine_type = VaccineType::Core;
                }
            }
            _ => schedule.push(VaccineAppointment {
                week: dose.week,
                date: add_weeks(input.birth_date, dose.week, "birth_date")?,
                vaccines: dose.vaccines.iter().map(|name| (*name).to_string()).collect(),
                vaccine_type: dose.vaccine_type,
                cost: Decimal::from(dose.cost),
            }),
        }
    }

    let total_cost: Decimal = schedule.iter().map(|appointment| appointment.cost).sum();
    let next_appointment = schedule
        .iter()
        .find(|appointment| appointment.date > today)
        .map_or(NextAppointment::Complete, |appointment| {
            NextAppointment::Scheduled(appointment.date)
        });

    tracing::debug!(
        event_name = "engine.vaccination.computed",
        appointments = schedule.len(),
        total_cost = %total_cost,
        "vaccination schedule computed"
    );

    Ok(VaccinationResult { schedule, total_cost, next_appointment })
}
