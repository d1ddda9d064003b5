//! Per-plan interest rules.
//!
//! Each plan type carries its own eligibility window and annual rate. A
//! calculator turns a deposit snapshot into one month's interest, already
//! rounded to cents; deposits outside the eligibility window earn exactly
//! zero, as does any deposit whose plan has no registered rule.

use crate::domain::models::deposit::TimeDeposit;

const BASIC_ANNUAL_RATE: f64 = 0.01;
const PREMIUM_ANNUAL_RATE: f64 = 0.05;
const STUDENT_ANNUAL_RATE: f64 = 0.03;

const MONTHS_PER_YEAR: f64 = 12.0;

/// Round a monetary amount to cents.
///
/// The epsilon is added before scaling to counteract binary floating-point
/// representation error. Stored balances were produced with this exact
/// sequence, so it must not change.
pub fn round_to_cents(amount: f64) -> f64 {
    ((amount + f64::EPSILON) * 100.0).round() / 100.0
}

/// One plan's interest rule.
pub trait InterestCalculator: Send + Sync {
    /// The plan tag this rule serves
    fn plan_type(&self) -> &'static str;

    /// One month's interest for the given deposit, rounded to cents
    fn interest_for(&self, deposit: &TimeDeposit) -> f64;
}

/// Basic plan: 1% annual, eligible after 30 days.
pub struct BasicPlanCalculator;

impl InterestCalculator for BasicPlanCalculator {
    fn plan_type(&self) -> &'static str {
        "basic"
    }

    fn interest_for(&self, deposit: &TimeDeposit) -> f64 {
        let mut interest = 0.0;
        if deposit.days > 30 {
            interest = deposit.balance * BASIC_ANNUAL_RATE / MONTHS_PER_YEAR;
        }
        round_to_cents(interest)
    }
}

/// Premium plan: 5% annual, eligible after 45 days.
pub struct PremiumPlanCalculator;

impl InterestCalculator for PremiumPlanCalculator {
    fn plan_type(&self) -> &'static str {
        "premium"
    }

    fn interest_for(&self, deposit: &TimeDeposit) -> f64 {
        let mut interest = 0.0;
        if deposit.days > 45 {
            interest = deposit.balance * PREMIUM_ANNUAL_RATE / MONTHS_PER_YEAR;
        }
        round_to_cents(interest)
    }
}

/// Student plan: 3% annual, eligible after 30 days and before a full year.
pub struct StudentPlanCalculator;

impl InterestCalculator for StudentPlanCalculator {
    fn plan_type(&self) -> &'static str {
        "student"
    }

    fn interest_for(&self, deposit: &TimeDeposit) -> f64 {
        let mut interest = 0.0;
        if deposit.days > 30 && deposit.days < 366 {
            interest = deposit.balance * STUDENT_ANNUAL_RATE / MONTHS_PER_YEAR;
        }
        round_to_cents(interest)
    }
}

/// The registered interest rules, resolved by plan tag.
///
/// Resolution walks the calculators in registration order and takes the
/// first match, so lookup stays deterministic even if a tag were ever
/// registered twice.
pub struct InterestCalculatorSet {
    calculators: Vec<Box<dyn InterestCalculator>>,
}

impl InterestCalculatorSet {
    pub fn new(calculators: Vec<Box<dyn InterestCalculator>>) -> Self {
        Self { calculators }
    }

    /// The standard rule set: basic, premium, student.
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(BasicPlanCalculator),
            Box::new(PremiumPlanCalculator),
            Box::new(StudentPlanCalculator),
        ])
    }

    /// First registered calculator matching the plan tag, if any.
    pub fn for_plan(&self, plan_type: &str) -> Option<&dyn InterestCalculator> {
        self.calculators
            .iter()
            .find(|calculator| calculator.plan_type() == plan_type)
            .map(|calculator| calculator.as_ref())
    }
}

impl Default for InterestCalculatorSet {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deposit(plan_type: &str, balance: f64, days: i32) -> TimeDeposit {
        TimeDeposit::new(1, plan_type, balance, days)
    }

    #[test]
    fn test_basic_plan_accrues_one_percent_over_twelve_months() {
        let interest = BasicPlanCalculator.interest_for(&deposit("basic", 12000.0, 60));
        assert_eq!(interest, 10.0);
    }

    #[test]
    fn test_basic_plan_requires_more_than_thirty_days() {
        let calculator = BasicPlanCalculator;
        assert_eq!(calculator.interest_for(&deposit("basic", 12000.0, 30)), 0.0);
        assert_eq!(calculator.interest_for(&deposit("basic", 12000.0, 31)), 10.0);
    }

    #[test]
    fn test_premium_plan_accrues_five_percent_over_twelve_months() {
        let interest = PremiumPlanCalculator.interest_for(&deposit("premium", 12000.0, 90));
        assert_eq!(interest, 50.0);
    }

    #[test]
    fn test_premium_plan_requires_more_than_forty_five_days() {
        let calculator = PremiumPlanCalculator;
        assert_eq!(calculator.interest_for(&deposit("premium", 10000.0, 45)), 0.0);
        assert!(calculator.interest_for(&deposit("premium", 10000.0, 46)) > 0.0);
    }

    #[test]
    fn test_student_plan_accrues_three_percent_over_twelve_months() {
        let interest = StudentPlanCalculator.interest_for(&deposit("student", 12000.0, 60));
        assert_eq!(interest, 30.0);
    }

    #[test]
    fn test_student_plan_window_excludes_both_bounds() {
        let calculator = StudentPlanCalculator;
        assert_eq!(calculator.interest_for(&deposit("student", 10000.0, 30)), 0.0);
        assert!(calculator.interest_for(&deposit("student", 10000.0, 31)) > 0.0);
        assert!(calculator.interest_for(&deposit("student", 10000.0, 365)) > 0.0);
        assert_eq!(calculator.interest_for(&deposit("student", 10000.0, 366)), 0.0);
    }

    #[test]
    fn test_round_to_cents_rounds_half_up_on_the_cent_boundary() {
        // 1.005 sits just below the boundary in binary floating point; the
        // epsilon correction must push it over
        assert_eq!(round_to_cents(1.005), 1.01);
        assert_eq!(round_to_cents(0.0), 0.0);
        assert_eq!(round_to_cents(10.0), 10.0);
        assert_eq!(round_to_cents(12.344), 12.34);
    }

    #[test]
    fn test_standard_set_resolves_each_plan_tag() {
        let set = InterestCalculatorSet::standard();
        assert_eq!(set.for_plan("basic").unwrap().plan_type(), "basic");
        assert_eq!(set.for_plan("premium").unwrap().plan_type(), "premium");
        assert_eq!(set.for_plan("student").unwrap().plan_type(), "student");
    }

    #[test]
    fn test_unknown_plan_tag_resolves_to_nothing() {
        let set = InterestCalculatorSet::standard();
        assert!(set.for_plan("gold").is_none());
        assert!(set.for_plan("").is_none());
    }

    #[test]
    fn test_first_registered_calculator_wins_on_duplicate_tags() {
        struct ZeroRateBasic;
        impl InterestCalculator for ZeroRateBasic {
            fn plan_type(&self) -> &'static str {
                "basic"
            }
            fn interest_for(&self, _deposit: &TimeDeposit) -> f64 {
                0.0
            }
        }

        let set = InterestCalculatorSet::new(vec![
            Box::new(ZeroRateBasic),
            Box::new(BasicPlanCalculator),
        ]);
        let resolved = set.for_plan("basic").unwrap();
        assert_eq!(resolved.interest_for(&deposit("basic", 12000.0, 60)), 0.0);
    }
}
