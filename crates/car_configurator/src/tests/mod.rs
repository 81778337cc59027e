//! End-to-end classification and customization scenarios

mod property_checks;
