use crate::data::category::CategoryRepository;
use crate::model::category::{CreateCategoryParams, UpdateCategoryParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod crud;
