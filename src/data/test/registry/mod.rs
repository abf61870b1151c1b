use crate::{
    data::registry::RegistryStore,
    error::registry::RegistryError,
    model::{movie::Locator, registry::MovieRegistry},
};
use test_utils::{builder::TestBuilder, factory};

mod load;
mod save;
