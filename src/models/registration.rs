use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "varchar", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "varchar", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Unpaid,
    Paid,
    Waived,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct LigaRegistration {
    pub id: Uuid,
    pub season_id: Uuid,
    pub club_id: Uuid,
    pub status: RegistrationStatus,
    pub payment_status: PaymentStatus,
    pub admin_notes: Option<String>,
    pub registered_at: DateTime<Utc>,
    pub approved_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct RegistrationWithClub {
    #[serde(flatten)]
    pub registration: LigaRegistration,
    pub club_name: String,
    pub captain_name: Option<String>,
    pub captain_email: Option<String>,
    pub captain_phone: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRegistrationStatusRequest {
    pub status: RegistrationStatus,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePaymentStatusRequest {
    pub payment_status: PaymentStatus,
}

#[derive(Debug, Deserialize)]
pub struct UpdateNotesRequest {
    pub notes: String,
}
