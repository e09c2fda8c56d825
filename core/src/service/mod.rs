pub mod calendar_service;
pub mod notice;

#[cfg(test)]
mod calendar_service_test;
