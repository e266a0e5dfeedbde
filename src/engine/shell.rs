use chrono::NaiveDate;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engine::filter::{filter_courts, CategoryFilter};
use crate::engine::wizard::{WizardAction, WizardOutcome, WizardState, WizardStep};
use crate::model::booking::BookingRecord;
use crate::model::catalog::COURTS;
use crate::model::court::Court;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Booking,
    Community,
    About,
    Profile,
}

impl View {
    pub const NAV: [View; 3] = [View::Home, View::Community, View::About];

    pub fn label(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Booking => "booking",
            View::Community => "community",
            View::About => "about",
            View::Profile => "profile",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShellAction {
    Navigate(View),
    SelectCourt(&'static Court),
    Wizard(WizardAction),
    SetCategory(CategoryFilter),
    SetQuery(String),
}

/// Top-level view state. Owns the wizard and the listing filters; the UI
/// reads from it and feeds it [`ShellAction`]s.
pub struct Shell {
    view: View,
    wizard: WizardState,
    category: CategoryFilter,
    query: String,
    ledger: Vec<BookingRecord>,
    contact_email: String,
    today: NaiveDate,
    rng: StdRng,
}

impl Shell {
    pub fn new(today: NaiveDate, contact_email: impl Into<String>, rng: StdRng) -> Self {
        Self {
            view: View::Home,
            wizard: WizardState::default(),
            category: CategoryFilter::All,
            query: String::new(),
            ledger: Vec::new(),
            contact_email: contact_email.into(),
            today,
            rng,
        }
    }

    pub fn with_system_clock(contact_email: impl Into<String>) -> Self {
        Self::new(
            chrono::Local::now().date_naive(),
            contact_email,
            StdRng::from_entropy(),
        )
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn wizard(&self) -> &WizardState {
        &self.wizard
    }

    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Bookings completed during this session, oldest first.
    pub fn ledger(&self) -> &[BookingRecord] {
        &self.ledger
    }

    pub fn set_contact_email(&mut self, email: impl Into<String>) {
        self.contact_email = email.into();
    }

    pub fn visible_courts(&self) -> Vec<&'static Court> {
        filter_courts(COURTS, self.category, &self.query)
    }

    pub fn dispatch(&mut self, action: ShellAction) {
        match action {
            ShellAction::Navigate(View::Booking) => {
                debug!("Ignoring direct navigation to booking view");
            }
            ShellAction::Navigate(view) => {
                info!("Navigate {} -> {}", self.view.label(), view.label());
                self.wizard.reset();
                self.view = view;
            }
            ShellAction::SelectCourt(court) => {
                self.wizard.select(court, self.today, &mut self.rng);
                self.view = View::Booking;
            }
            ShellAction::Wizard(action) => {
                let outcome = self.wizard.apply(action, &self.contact_email, &mut self.rng);
                match outcome {
                    WizardOutcome::Moved { to: WizardStep::Success, .. } => {
                        if let Some(record) = self.wizard.booking() {
                            self.ledger.push(record.clone());
                        }
                    }
                    WizardOutcome::Exited => {
                        self.view = View::Home;
                    }
                    _ => {}
                }
            }
            ShellAction::SetCategory(category) => {
                debug!("Category filter -> {}", category.label());
                self.category = category;
            }
            ShellAction::SetQuery(query) => {
                self.query = query;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::booking::PaymentMethod;
    use crate::model::catalog::court_by_id;
    use crate::model::court::SportType;

    fn shell() -> Shell {
        Shell::new(
            NaiveDate::from_ymd_opt(2024, 7, 15).unwrap(),
            "john.doe@athlete.com",
            StdRng::seed_from_u64(1),
        )
    }

    fn run_to_confirmation(shell: &mut Shell) {
        for action in [
            WizardAction::BookNow,
            WizardAction::ContinueToPayment,
            WizardAction::ChoosePayment(PaymentMethod::QrSecurePay),
            WizardAction::ViewConfirmation,
        ] {
            shell.dispatch(ShellAction::Wizard(action));
        }
    }

    #[test]
    fn selecting_court_opens_booking_at_details() {
        let mut s = shell();
        let court = court_by_id("c2").unwrap();
        s.dispatch(ShellAction::SelectCourt(court));

        assert_eq!(s.view(), View::Booking);
        assert_eq!(s.wizard().court(), Some(court));
        assert_eq!(s.wizard().step(), WizardStep::Details);
    }

    #[test]
    fn switching_tabs_mid_wizard_resets() {
        for target in [View::Home, View::Community, View::About, View::Profile] {
            let mut s = shell();
            s.dispatch(ShellAction::SelectCourt(court_by_id("c3").unwrap()));
            s.dispatch(ShellAction::Wizard(WizardAction::BookNow));
            s.dispatch(ShellAction::Wizard(WizardAction::ContinueToPayment));

            s.dispatch(ShellAction::Navigate(target));
            assert_eq!(s.view(), target);
            assert_eq!(s.wizard().court(), None);
            assert_eq!(s.wizard().step(), WizardStep::Details);
        }
    }

    #[test]
    fn booking_view_is_only_reached_by_selecting() {
        let mut s = shell();
        s.dispatch(ShellAction::Navigate(View::Booking));
        assert_eq!(s.view(), View::Home);
    }

    #[test]
    fn completed_flow_returns_home_and_records_booking() {
        let mut s = shell();
        s.dispatch(ShellAction::SelectCourt(court_by_id("c1").unwrap()));
        run_to_confirmation(&mut s);
        assert_eq!(s.wizard().step(), WizardStep::Confirmation);

        s.dispatch(ShellAction::Wizard(WizardAction::BackToHome));
        assert_eq!(s.view(), View::Home);
        assert_eq!(s.wizard().court(), None);
        assert_eq!(s.wizard().step(), WizardStep::Details);

        assert_eq!(s.ledger().len(), 1);
        assert_eq!(s.ledger()[0].court_id, "c1");
    }

    #[test]
    fn filters_drive_visible_courts() {
        let mut s = shell();
        s.dispatch(ShellAction::SetCategory(CategoryFilter::Only(SportType::Pickleball)));
        let ids: Vec<_> = s.visible_courts().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["c2", "c5"]);

        s.dispatch(ShellAction::SetQuery("westside".into()));
        let ids: Vec<_> = s.visible_courts().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["c5"]);
    }
}
