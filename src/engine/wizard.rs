use chrono::NaiveDate;
use log::{debug, info, warn};
use rand::Rng;

use crate::model::booking::{BookingRecord, CalendarSelection, PaymentMethod, TimeSlot};
use crate::model::court::Court;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    Details,
    Calendar,
    Payment,
    Success,
    Confirmation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    Photos,
    Map,
    Pricing,
    Availability,
}

impl DetailTab {
    pub const ALL: [DetailTab; 4] = [
        DetailTab::Photos,
        DetailTab::Map,
        DetailTab::Pricing,
        DetailTab::Availability,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DetailTab::Photos => "Gallery",
            DetailTab::Map => "Location",
            DetailTab::Pricing => "Pricing Info",
            DetailTab::Availability => "Hours",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardAction {
    BookNow,
    Cancel,
    ContinueToPayment,
    GoBack,
    ChoosePayment(PaymentMethod),
    ViewConfirmation,
    BackToHome,
    SelectDetailTab(DetailTab),
    PickDate(NaiveDate),
    PickSlot(TimeSlot),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardOutcome {
    /// Step changed.
    Moved { from: WizardStep, to: WizardStep },
    /// Selection or sub-tab changed; step did not.
    Updated,
    /// The wizard finished and was cleared.
    Exited,
    /// Action has no meaning in the current step.
    Ignored,
    /// No court selected.
    Rejected,
}

/// Booking flow for one selected court.
///
/// The wizard only leaves `Details` while a court is selected. Every
/// action goes through [`WizardState::apply`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WizardState {
    court: Option<&'static Court>,
    step: WizardStep,
    detail_tab: DetailTab,
    selection: Option<CalendarSelection>,
    booking: Option<BookingRecord>,
    availability_seed: u64,
}

impl WizardState {
    pub fn court(&self) -> Option<&'static Court> {
        self.court
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn detail_tab(&self) -> DetailTab {
        self.detail_tab
    }

    pub fn selection(&self) -> Option<CalendarSelection> {
        self.selection
    }

    pub fn booking(&self) -> Option<&BookingRecord> {
        self.booking.as_ref()
    }

    pub fn availability_seed(&self) -> u64 {
        self.availability_seed
    }

    /// Start a fresh flow for `court`, discarding whatever was in progress.
    pub fn select<R: Rng>(&mut self, court: &'static Court, today: NaiveDate, rng: &mut R) {
        info!("Court selected — id={} name={}", court.id, court.name);
        *self = Self {
            court: Some(court),
            step: WizardStep::Details,
            detail_tab: DetailTab::Photos,
            selection: Some(CalendarSelection::starting(today)),
            booking: None,
            availability_seed: rng.gen(),
        };
    }

    pub fn reset(&mut self) {
        if self.court.is_some() {
            debug!("Wizard reset from step {:?}", self.step);
        }
        *self = Self::default();
    }

    pub fn apply<R: Rng>(
        &mut self,
        action: WizardAction,
        contact_email: &str,
        rng: &mut R,
    ) -> WizardOutcome {
        let Some(court) = self.court else {
            warn!("Wizard action {:?} rejected: no court selected", action);
            return WizardOutcome::Rejected;
        };

        use WizardAction as A;
        use WizardStep as S;

        let next = match (self.step, action) {
            (S::Details, A::BookNow) => S::Calendar,
            (S::Calendar, A::Cancel) => S::Details,
            (S::Calendar, A::ContinueToPayment) => S::Payment,
            (S::Payment, A::GoBack) => S::Calendar,
            (S::Payment, A::ChoosePayment(method)) => {
                let selection = self
                    .selection
                    .unwrap_or_else(|| CalendarSelection::starting(chrono::Local::now().date_naive()));
                let record = BookingRecord::issue(court, selection, method, contact_email, rng);
                info!(
                    "Booking issued — order={} court={} at={} via={}",
                    record.order_id,
                    court.id,
                    selection.display(),
                    method.label()
                );
                self.booking = Some(record);
                S::Success
            }
            (S::Success, A::ViewConfirmation) => S::Confirmation,
            (S::Confirmation, A::BackToHome) => {
                info!("Booking flow finished for {}", court.id);
                *self = Self::default();
                return WizardOutcome::Exited;
            }
            (S::Details, A::SelectDetailTab(tab)) => {
                self.detail_tab = tab;
                return WizardOutcome::Updated;
            }
            (S::Calendar, A::PickDate(date)) => {
                let slot = self.selection.map(|s| s.slot).unwrap_or(TimeSlot::Morning10);
                self.selection = Some(CalendarSelection { date, slot });
                return WizardOutcome::Updated;
            }
            (S::Calendar, A::PickSlot(slot)) => {
                if let Some(selection) = self.selection.as_mut() {
                    selection.slot = slot;
                }
                return WizardOutcome::Updated;
            }
            (step, action) => {
                debug!("Wizard action {:?} ignored in step {:?}", action, step);
                return WizardOutcome::Ignored;
            }
        };

        let from = self.step;
        self.step = next;
        debug!("Wizard {:?} -> {:?}", from, next);
        WizardOutcome::Moved { from, to: next }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::court_by_id;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const EMAIL: &str = "john.doe@athlete.com";

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 15).unwrap()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn wizard_at(step: WizardStep) -> (WizardState, StdRng) {
        let mut rng = rng();
        let mut w = WizardState::default();
        w.select(court_by_id("c1").unwrap(), today(), &mut rng);

        let path = [
            (WizardStep::Calendar, WizardAction::BookNow),
            (WizardStep::Payment, WizardAction::ContinueToPayment),
            (
                WizardStep::Success,
                WizardAction::ChoosePayment(PaymentMethod::QrSecurePay),
            ),
            (WizardStep::Confirmation, WizardAction::ViewConfirmation),
        ];
        for (reached, action) in path {
            if w.step() == step {
                break;
            }
            w.apply(action, EMAIL, &mut rng);
            assert_eq!(w.step(), reached);
        }
        assert_eq!(w.step(), step);
        (w, rng)
    }

    fn all_actions() -> Vec<WizardAction> {
        vec![
            WizardAction::BookNow,
            WizardAction::Cancel,
            WizardAction::ContinueToPayment,
            WizardAction::GoBack,
            WizardAction::ChoosePayment(PaymentMethod::QrSecurePay),
            WizardAction::ChoosePayment(PaymentMethod::PhoneBooking),
            WizardAction::ViewConfirmation,
            WizardAction::BackToHome,
        ]
    }

    /// Resulting step of every step-changing action from `step`.
    fn reachable(step: WizardStep) -> Vec<(WizardAction, WizardOutcome)> {
        all_actions()
            .into_iter()
            .map(|action| {
                let (mut w, mut rng) = wizard_at(step);
                (action, w.apply(action, EMAIL, &mut rng))
            })
            .filter(|(_, outcome)| {
                matches!(outcome, WizardOutcome::Moved { .. } | WizardOutcome::Exited)
            })
            .collect()
    }

    #[test]
    fn selecting_a_court_starts_at_details() {
        let mut rng = rng();
        let (mut w, _) = wizard_at(WizardStep::Payment);
        let court = court_by_id("c4").unwrap();
        w.select(court, today(), &mut rng);

        assert_eq!(w.court(), Some(court));
        assert_eq!(w.step(), WizardStep::Details);
        assert_eq!(w.detail_tab(), DetailTab::Photos);
        assert!(w.booking().is_none());
    }

    #[test]
    fn details_has_single_exit_to_calendar() {
        let moves = reachable(WizardStep::Details);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].0, WizardAction::BookNow);
        assert_eq!(
            moves[0].1,
            WizardOutcome::Moved { from: WizardStep::Details, to: WizardStep::Calendar }
        );
    }

    #[test]
    fn calendar_goes_back_or_forward() {
        let moves = reachable(WizardStep::Calendar);
        assert_eq!(
            moves,
            vec![
                (
                    WizardAction::Cancel,
                    WizardOutcome::Moved { from: WizardStep::Calendar, to: WizardStep::Details }
                ),
                (
                    WizardAction::ContinueToPayment,
                    WizardOutcome::Moved { from: WizardStep::Calendar, to: WizardStep::Payment }
                ),
            ]
        );
    }

    #[test]
    fn payment_goes_back_or_either_method_succeeds() {
        let moves = reachable(WizardStep::Payment);
        assert_eq!(moves.len(), 3);
        assert_eq!(
            moves[0],
            (
                WizardAction::GoBack,
                WizardOutcome::Moved { from: WizardStep::Payment, to: WizardStep::Calendar }
            )
        );
        for (_, outcome) in &moves[1..] {
            assert_eq!(
                *outcome,
                WizardOutcome::Moved { from: WizardStep::Payment, to: WizardStep::Success }
            );
        }
    }

    #[test]
    fn success_only_leads_to_confirmation() {
        let moves = reachable(WizardStep::Success);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].0, WizardAction::ViewConfirmation);
    }

    #[test]
    fn back_to_home_clears_selection() {
        let (mut w, mut rng) = wizard_at(WizardStep::Confirmation);
        assert_eq!(reachable(WizardStep::Confirmation).len(), 1);

        let outcome = w.apply(WizardAction::BackToHome, EMAIL, &mut rng);
        assert_eq!(outcome, WizardOutcome::Exited);
        assert_eq!(w.court(), None);
        assert_eq!(w.step(), WizardStep::Details);
    }

    #[test]
    fn no_court_means_no_transitions() {
        let mut rng = rng();
        let mut w = WizardState::default();
        for action in all_actions() {
            assert_eq!(w.apply(action, EMAIL, &mut rng), WizardOutcome::Rejected);
            assert_eq!(w.step(), WizardStep::Details);
        }
    }

    #[test]
    fn detail_tab_does_not_move_step() {
        let (mut w, mut rng) = wizard_at(WizardStep::Details);
        let outcome = w.apply(
            WizardAction::SelectDetailTab(DetailTab::Pricing),
            EMAIL,
            &mut rng,
        );
        assert_eq!(outcome, WizardOutcome::Updated);
        assert_eq!(w.step(), WizardStep::Details);
        assert_eq!(w.detail_tab(), DetailTab::Pricing);
    }

    #[test]
    fn confirmation_uses_picked_date_and_slot() {
        let (mut w, mut rng) = wizard_at(WizardStep::Calendar);
        let picked = NaiveDate::from_ymd_opt(2024, 7, 22).unwrap();
        w.apply(WizardAction::PickDate(picked), EMAIL, &mut rng);
        w.apply(WizardAction::PickSlot(TimeSlot::Evening8), EMAIL, &mut rng);
        w.apply(WizardAction::ContinueToPayment, EMAIL, &mut rng);
        w.apply(
            WizardAction::ChoosePayment(PaymentMethod::PhoneBooking),
            EMAIL,
            &mut rng,
        );

        let booking = w.booking().unwrap();
        assert_eq!(booking.selection.date, picked);
        assert_eq!(booking.selection.slot, TimeSlot::Evening8);
        assert_eq!(booking.payment, PaymentMethod::PhoneBooking);
        assert_eq!(booking.court_name, "Skyline Badminton Arena");
        assert_eq!(booking.amount, 15);
        assert_eq!(booking.contact_email, EMAIL);
    }

    #[test]
    fn default_selection_is_today_at_ten() {
        let (w, _) = wizard_at(WizardStep::Calendar);
        let sel = w.selection().unwrap();
        assert_eq!(sel.date, today());
        assert_eq!(sel.slot, TimeSlot::Morning10);
    }
}
