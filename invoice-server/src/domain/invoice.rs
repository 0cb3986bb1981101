use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Invoice {
    pub id: Uuid,
    pub user_id: Uuid,
    pub vendor_name: String,
    pub amount: f64,
    pub due_date: DateTime<Utc>,
    pub description: Option<String>,
    pub paid: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Invoice {
    pub fn new(
        user_id: Uuid,
        vendor_name: String,
        amount: f64,
        due_date: DateTime<Utc>,
        description: Option<String>,
        paid: bool,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            vendor_name,
            amount,
            due_date,
            description,
            paid,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn status_at(&self, now: DateTime<Utc>) -> InvoiceStatus {
        derive_status(self.paid, self.due_date, now)
    }
}

/// Payment state computed at read time, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Paid,
    Overdue,
    Open,
}

/// Derives the payment status of an invoice.
///
/// `paid` wins unconditionally: a settled invoice is never overdue, no matter
/// how far past its due date it was settled. Otherwise only a strictly-past
/// due date counts as overdue; `due_date == now` is still open.
pub fn derive_status(paid: bool, due_date: DateTime<Utc>, now: DateTime<Utc>) -> InvoiceStatus {
    if paid {
        InvoiceStatus::Paid
    } else if due_date < now {
        InvoiceStatus::Overdue
    } else {
        InvoiceStatus::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn paid_wins_regardless_of_date_ordering() {
        let now = at(2024, 12, 5);
        assert_eq!(derive_status(true, at(2024, 11, 30), now), InvoiceStatus::Paid);
        assert_eq!(derive_status(true, at(2024, 12, 15), now), InvoiceStatus::Paid);
        assert_eq!(derive_status(true, now, now), InvoiceStatus::Paid);
    }

    #[test]
    fn unpaid_past_due_is_overdue() {
        let now = at(2024, 12, 5);
        assert_eq!(
            derive_status(false, at(2024, 12, 1), now),
            InvoiceStatus::Overdue
        );
        assert_eq!(
            derive_status(false, now - chrono::Duration::seconds(1), now),
            InvoiceStatus::Overdue
        );
    }

    #[test]
    fn unpaid_future_due_is_open() {
        let now = at(2024, 12, 5);
        assert_eq!(
            derive_status(false, at(2024, 12, 15), now),
            InvoiceStatus::Open
        );
    }

    #[test]
    fn due_exactly_now_is_not_overdue() {
        let now = at(2024, 12, 5);
        assert_eq!(derive_status(false, now, now), InvoiceStatus::Open);
    }

    #[test]
    fn status_serializes_to_lowercase_labels() {
        assert_eq!(
            serde_json::to_string(&InvoiceStatus::Paid).unwrap(),
            "\"paid\""
        );
        assert_eq!(
            serde_json::to_string(&InvoiceStatus::Overdue).unwrap(),
            "\"overdue\""
        );
        assert_eq!(
            serde_json::to_string(&InvoiceStatus::Open).unwrap(),
            "\"open\""
        );
    }
}
