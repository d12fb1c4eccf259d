mod forward;
mod property_random_access;
pub(crate) mod support;
