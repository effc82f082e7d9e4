use crate::data::booking::BookingRepository;
use crate::model::booking::{BookingStatus, BookingView};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_overlapping;
mod get_all_paginated;
mod get_for_user;
mod set_status;
