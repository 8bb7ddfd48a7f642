/// Fleet scanning - domain model and services
pub mod domain;
pub mod services;
