use crate::membership_level::MembershipLevel;
use derive_getters::Getters;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

const MINIMUM_PHONE_DIGITS: usize = 10;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum JoinFieldError {
    #[error("Please enter your first name")]
    MissingFirstName,
    #[error("Please enter your last name")]
    MissingLastName,
    #[error("Please enter your email")]
    MissingEmail,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter your phone number")]
    MissingPhone,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
    #[error("Please enter your business name")]
    MissingBusinessName,
    #[error("Please select a membership level")]
    MissingMembership,
}

impl JoinFieldError {
    /// Name of the form field the error relates to.
    pub fn field(&self) -> &'static str {
        match self {
            JoinFieldError::MissingFirstName => "firstName",
            JoinFieldError::MissingLastName => "lastName",
            JoinFieldError::MissingEmail | JoinFieldError::InvalidEmail => "email",
            JoinFieldError::MissingPhone | JoinFieldError::InvalidPhone => "phone",
            JoinFieldError::MissingBusinessName => "businessName",
            JoinFieldError::MissingMembership => "membership",
        }
    }
}

/// A membership application, as filled in on the join page.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct JoinApplication {
    first_name: String,
    last_name: String,
    organization_title: String,
    email: String,
    phone: String,
    business_name: String,
    membership: Option<String>,
    business_description: String,
    /// Milliseconds since the Unix epoch at which the form was loaded.
    timestamp: Option<i64>,
}

impl JoinApplication {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        first_name: String,
        last_name: String,
        organization_title: String,
        email: String,
        phone: String,
        business_name: String,
        membership: Option<String>,
        business_description: String,
        timestamp: Option<i64>,
    ) -> Self {
        Self {
            first_name,
            last_name,
            organization_title,
            email,
            phone,
            business_name,
            membership,
            business_description,
            timestamp,
        }
    }

    pub fn membership_level(&self) -> Option<MembershipLevel> {
        self.membership
            .as_deref()
            .and_then(MembershipLevel::from_form_value)
    }

    /// Check every field and return all the problems found, in form order.
    pub fn validate(&self) -> Result<(), Vec<JoinFieldError>> {
        let mut errors = vec![];
        if self.first_name.trim().is_empty() {
            errors.push(JoinFieldError::MissingFirstName);
        }
        if self.last_name.trim().is_empty() {
            errors.push(JoinFieldError::MissingLastName);
        }
        if self.email.trim().is_empty() {
            errors.push(JoinFieldError::MissingEmail);
        } else if !is_valid_email(&self.email) {
            errors.push(JoinFieldError::InvalidEmail);
        }
        if self.phone.trim().is_empty() {
            errors.push(JoinFieldError::MissingPhone);
        } else if !is_valid_phone(&self.phone) {
            errors.push(JoinFieldError::InvalidPhone);
        }
        if self.business_name.trim().is_empty() {
            errors.push(JoinFieldError::MissingBusinessName);
        }
        if self.membership_level().is_none() {
            errors.push(JoinFieldError::MissingMembership);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    phone.chars().filter(char::is_ascii_digit).count() >= MINIMUM_PHONE_DIGITS
}

/// What a membership level costs and brings, shown in the join page modal.
#[derive(Debug, Serialize, Getters, PartialEq, Clone)]
pub struct MembershipOffer {
    level: MembershipLevel,
    #[getter(skip)]
    title: &'static str,
    #[getter(skip)]
    price: &'static str,
    #[getter(skip)]
    description: &'static str,
    benefits: Vec<&'static str>,
}

impl MembershipOffer {
    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn price(&self) -> &'static str {
        self.price
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn for_level(level: MembershipLevel) -> Option<Self> {
        let offer = match level {
            MembershipLevel::NonProfit => Self {
                level,
                title: "NP Membership (Non-Profit)",
                price: "Free",
                description: "Perfect for non-profit organizations looking to connect with the local business community.",
                benefits: vec![
                    "Business listing in our online directory",
                    "Access to member-only events",
                    "Monthly newsletter",
                    "Discounts on chamber events",
                    "Access to member resources",
                ],
            },
            MembershipLevel::Bronze => Self {
                level,
                title: "Bronze Membership",
                price: "$250/year",
                description: "Great for small businesses looking to grow their network and gain visibility.",
                benefits: vec![
                    "All NP benefits, plus:",
                    "5% discount on all chamber events",
                    "Quarterly training sessions",
                    "Business referral program",
                    "Social media mentions",
                    "Access to member-only job board",
                ],
            },
            MembershipLevel::Silver => Self {
                level,
                title: "Silver Membership",
                price: "$500/year",
                description: "Ideal for growing businesses looking for increased visibility and networking opportunities.",
                benefits: vec![
                    "All Bronze benefits, plus:",
                    "10% discount on all chamber events",
                    "Monthly training and workshops",
                    "Featured in our monthly newsletter",
                    "Priority event registration",
                    "Business spotlight opportunity",
                    "Access to premium resources",
                ],
            },
            MembershipLevel::Gold => Self {
                level,
                title: "Gold Membership",
                price: "$1,000/year",
                description: "Our premium membership for businesses seeking maximum visibility and leadership in the community.",
                benefits: vec![
                    "All Silver benefits, plus:",
                    "20% discount on all chamber events",
                    "Weekly training and workshops",
                    "Featured homepage spotlight",
                    "Priority support",
                    "VIP event invitations",
                    "Dedicated account manager",
                    "Premium business listing with logo",
                    "Speaking opportunities at events",
                ],
            },
            MembershipLevel::Member => return None,
        };
        Some(offer)
    }

    /// Label of the button selecting this offer, such as `Select Gold`.
    pub fn select_label(&self) -> String {
        let first_word = self.title.split(' ').next().unwrap_or(self.title);
        format!("Select {first_word}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    fn valid_application() -> JoinApplication {
        JoinApplication::new(
            "Amadou".to_owned(),
            "Traoré".to_owned(),
            "Owner".to_owned(),
            "amadou@example.com".to_owned(),
            "+223 20 21 22 23 24".to_owned(),
            "Traoré & Fils".to_owned(),
            Some("gold".to_owned()),
            "".to_owned(),
            Some(1_700_000_000_000),
        )
    }

    #[test]
    fn should_accept_valid_application() {
        assert_eq!(Ok(()), valid_application().validate());
        assert_eq!(
            Some(MembershipLevel::Gold),
            valid_application().membership_level()
        );
    }

    #[test]
    fn should_report_every_missing_field() {
        let errors = JoinApplication::default().validate().unwrap_err();

        assert_eq!(
            vec![
                JoinFieldError::MissingFirstName,
                JoinFieldError::MissingLastName,
                JoinFieldError::MissingEmail,
                JoinFieldError::MissingPhone,
                JoinFieldError::MissingBusinessName,
                JoinFieldError::MissingMembership,
            ],
            errors
        );
    }

    #[test]
    fn should_report_malformed_fields() {
        let mut application = valid_application();
        application.email = "amadou@example".to_owned();
        application.phone = "555-1234".to_owned();
        application.membership = Some("platinum".to_owned());

        let errors = application.validate().unwrap_err();

        assert_eq!(
            vec![
                JoinFieldError::InvalidEmail,
                JoinFieldError::InvalidPhone,
                JoinFieldError::MissingMembership,
            ],
            errors
        );
        assert_eq!("Please enter a valid email address", errors[0].to_string());
        assert_eq!("email", errors[0].field());
    }

    #[parameterized(
        email = {"a@b.co", "first.last@example.org", "a b@c.de", "a@b", "@b.co", "a@@b.co"},
        expected_result = {true, true, false, false, false, false}
    )]
    fn should_validate_email(email: &str, expected_result: bool) {
        assert_eq!(expected_result, is_valid_email(email));
    }

    #[parameterized(
        phone = {"5551234567", "(555) 123-4567", "+223 20212223", "555-1234"},
        expected_result = {true, true, true, false}
    )]
    fn should_validate_phone(phone: &str, expected_result: bool) {
        assert_eq!(expected_result, is_valid_phone(phone));
    }

    #[test]
    fn should_describe_every_offered_level() {
        for level in MembershipLevel::ALL {
            let offer = MembershipOffer::for_level(level).unwrap();
            assert_eq!(level, *offer.level());
            assert!(!offer.benefits().is_empty());
        }
        assert_eq!(None, MembershipOffer::for_level(MembershipLevel::Member));
    }

    #[test]
    fn should_build_select_label() {
        let offer = MembershipOffer::for_level(MembershipLevel::NonProfit).unwrap();
        assert_eq!("Select NP", offer.select_label());
    }
}
