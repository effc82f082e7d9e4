use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::booking::BookingDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DashboardDto {
    pub active_bookings: Vec<BookingDto>,
    pub history_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookingHistoryDto {
    pub bookings: Vec<BookingDto>,
}
