//! Commons - building blocks shared by service components
//!
//! This crate contains the portable core every component leans on:
//! - Dynamic value conversion and JSON helpers (`convert`)
//! - A categorized application error with serializable descriptions (`error`)
//! - Component references and cleanup contracts (`refer`, `run`)
//! - Key-value configuration and id generation (`config`, `data`)
//! - Schema-based validation of dynamic data (`validate`)
//!
//! Dynamic data is modeled as [`serde_json::Value`]; "absent" means `None`
//! or `Value::Null`.

pub mod convert {
    pub mod array_converter;
    pub mod boolean_converter;
    pub mod date_time_converter;
    pub mod json_converter;
    pub mod map_converter;
    pub mod number_converter;
    pub mod string_converter;
    pub mod type_code;
    pub mod type_converter;
}
pub mod error {
    pub mod application_error;
    pub mod category;
    pub mod conversions;
    pub mod description;
    pub mod parse;
}
pub mod refer {
    pub mod descriptor;
    pub mod locator;
    pub mod referenceable;
    pub mod references;
}
pub mod run {
    pub mod cleanable;
}
pub mod config {
    pub mod config_params;
}
pub mod data {
    pub mod id_generator;
}
pub mod validate {
    pub mod array_schema;
    pub mod object_comparator;
    pub mod object_reader;
    pub mod object_schema;
    pub mod property_schema;
    pub mod rule;
    pub mod rules {
        pub mod exists;
        pub mod excluded;
        pub mod included;
        pub mod logic;
        pub mod properties_comparison;
        pub mod value_comparison;
    }
    pub mod schema;
    pub mod type_matcher;
    pub mod validation_error;
    pub mod validation_result;
}

pub use error::application_error::{ApplicationError, CommonsResult};
pub use error::category::ErrorCategory;
