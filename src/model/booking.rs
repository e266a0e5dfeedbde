use chrono::{Datelike, NaiveDate};
use rand::Rng;

use crate::model::court::Court;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSlot {
    Morning8,
    Morning10,
    Afternoon1,
    Afternoon3,
    Evening6,
    Evening8,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 6] = [
        TimeSlot::Morning8,
        TimeSlot::Morning10,
        TimeSlot::Afternoon1,
        TimeSlot::Afternoon3,
        TimeSlot::Evening6,
        TimeSlot::Evening8,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TimeSlot::Morning8 => "08:00 AM",
            TimeSlot::Morning10 => "10:00 AM",
            TimeSlot::Afternoon1 => "01:00 PM",
            TimeSlot::Afternoon3 => "03:00 PM",
            TimeSlot::Evening6 => "06:00 PM",
            TimeSlot::Evening8 => "08:00 PM",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    QrSecurePay,
    PhoneBooking,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::QrSecurePay => "QR Secure Pay",
            PaymentMethod::PhoneBooking => "Phone Booking",
        }
    }

    pub fn blurb(&self) -> &'static str {
        match self {
            PaymentMethod::QrSecurePay => {
                "Scan & pay instantly with Apple Pay, Google Pay, or Credit Card."
            }
            PaymentMethod::PhoneBooking => {
                "Speak to our staff to finalize details over the phone."
            }
        }
    }
}

/// What the user picked on the calendar step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarSelection {
    pub date: NaiveDate,
    pub slot: TimeSlot,
}

impl CalendarSelection {
    pub fn starting(today: NaiveDate) -> Self {
        Self {
            date: today,
            slot: TimeSlot::Morning10,
        }
    }

    /// "Monday, July 15 • 10:00 AM"
    pub fn display(&self) -> String {
        format!("{} • {}", self.date.format("%A, %B %-d"), self.slot.label())
    }
}

/// Confirmation facts for one completed booking, derived from the actual
/// selections made during the wizard.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRecord {
    pub order_id: String,
    pub confirmation_number: String,
    pub access_code: String,
    pub court_id: &'static str,
    pub court_name: &'static str,
    pub selection: CalendarSelection,
    pub payment: PaymentMethod,
    pub amount: u32,
    pub contact_email: String,
}

impl BookingRecord {
    pub fn issue<R: Rng>(
        court: &Court,
        selection: CalendarSelection,
        payment: PaymentMethod,
        contact_email: &str,
        rng: &mut R,
    ) -> Self {
        Self {
            order_id: format!("#SS-{}", rng.gen_range(10_000..100_000)),
            confirmation_number: format!("SS-BK-{:05}", rng.gen_range(0..100_000)),
            access_code: format!("C-{}", rng.gen_range(1_000..10_000)),
            court_id: court.id,
            court_name: court.name,
            selection,
            payment,
            // one hour at the standard rate
            amount: court.price,
            contact_email: contact_email.to_string(),
        }
    }

    pub fn amount_label(&self) -> String {
        format!("${}.00", self.amount)
    }

    pub fn receipt_text(&self) -> String {
        let mut out = String::new();
        out.push_str("SportSync Booking Receipt\n");
        out.push_str("=========================\n\n");
        out.push_str(&format!("Confirmation Number: {}\n", self.confirmation_number));
        out.push_str(&format!("Order ID:            {}\n", self.order_id));
        out.push_str(&format!("Venue:               {}\n", self.court_name));
        out.push_str(&format!("Date & Time:         {}\n", self.selection.display()));
        out.push_str(&format!("Amount Paid:         {}\n", self.amount_label()));
        out.push_str(&format!("Payment Method:      {}\n", self.payment.label()));
        out.push_str(&format!("Access Code:         {}\n", self.access_code));
        out.push_str(&format!("Sent To:             {}\n", self.contact_email));
        out
    }
}

pub fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };

    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}
