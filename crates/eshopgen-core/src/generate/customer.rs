//! # Customer Generator
//!
//! Most customers are established accounts registered two to three years
//! ago; the rest joined within the last two years. Every registration date is
//! recorded so the order stage can keep order dates on or after it.

use chrono::NaiveDate;
use fake::faker::address::en::CityName;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use rand::Rng;

use crate::generate::lookup::RegistrationDates;
use crate::generate::random::{date_between, years_before};
use crate::generate::records::Customer;

/// Share of customers registered two to three years before `today`.
pub const ESTABLISHED_SHARE: f64 = 0.70;

/// Generate customers with ids `1..=count`, recording each registration date.
pub fn generate_customers(
    count: usize,
    today: NaiveDate,
    rng: &mut impl Rng,
    registrations: &mut RegistrationDates,
) -> Vec<Customer> {
    let three_years_ago = years_before(today, 3);
    let two_years_ago = years_before(today, 2);

    let mut customers = Vec::with_capacity(count);
    for id in 1..=count as i64 {
        let first_name: String = FirstName().fake_with_rng(rng);
        let last_name: String = LastName().fake_with_rng(rng);
        let email = unique_email(SafeEmail().fake_with_rng(rng), id);
        let city: String = CityName().fake_with_rng(rng);

        let registration_date = if rng.random::<f64>() < ESTABLISHED_SHARE {
            date_between(rng, three_years_ago, two_years_ago)
        } else {
            date_between(rng, two_years_ago, today)
        };

        registrations.record(id, registration_date);
        customers.push(Customer {
            id,
            first_name,
            last_name,
            email,
            city,
            registration_date,
        });
    }

    tracing::debug!("Generated {} customers", customers.len());
    customers
}

/// Tag the local part with the customer id so emails never collide.
fn unique_email(email: String, id: i64) -> String {
    match email.split_once('@') {
        Some((local, domain)) => format!("{}.{}@{}", local, id, domain),
        None => format!("customer{}@example.com", id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn test_ids_are_contiguous_and_recorded() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut registrations = RegistrationDates::new();
        let customers = generate_customers(50, today(), &mut rng, &mut registrations);

        let ids: Vec<i64> = customers.iter().map(|c| c.id).collect();
        assert_eq!(ids, (1..=50).collect::<Vec<_>>());
        assert_eq!(registrations.len(), 50);
        for c in &customers {
            assert_eq!(registrations.get(c.id), Some(c.registration_date));
        }
    }

    #[test]
    fn test_registration_dates_within_three_years() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut registrations = RegistrationDates::new();
        let customers = generate_customers(500, today(), &mut rng, &mut registrations);

        let earliest = years_before(today(), 3);
        let two_years_ago = years_before(today(), 2);
        let established = customers
            .iter()
            .filter(|c| c.registration_date <= two_years_ago)
            .count();
        for c in &customers {
            assert!(c.registration_date >= earliest && c.registration_date <= today());
        }
        // ~70% expected; generous bounds
        assert!(
            (290..=410).contains(&established),
            "Expected ~350 established customers, got {}",
            established
        );
    }

    #[test]
    fn test_emails_unique() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut registrations = RegistrationDates::new();
        let customers = generate_customers(300, today(), &mut rng, &mut registrations);
        let emails: HashSet<&str> = customers.iter().map(|c| c.email.as_str()).collect();
        assert_eq!(emails.len(), 300);
        assert!(customers.iter().all(|c| c.email.contains('@')));
    }

    #[test]
    fn test_unique_email_fallback() {
        assert_eq!(unique_email("broken".to_string(), 4), "customer4@example.com");
        assert_eq!(
            unique_email("ann@example.org".to_string(), 12),
            "ann.12@example.org"
        );
    }
}
