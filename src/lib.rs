//! Planning core of the smoking-cessation member views: pagination, plan
//! calendar derivation and `dd-mm-yyyy` date handling.

pub mod calendar;
pub mod dates;
pub mod domain;
pub mod dto;
pub mod error_conversions;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod services;
