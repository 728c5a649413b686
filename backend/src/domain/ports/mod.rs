//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod code_delivery;
mod registration_stages;
mod user_store;

#[cfg(test)]
pub use code_delivery::MockCodeDelivery;
pub use code_delivery::{CodeDelivery, CodeDeliveryError, RecordingCodeDelivery};
#[cfg(test)]
pub use registration_stages::MockRegistrationStages;
pub use registration_stages::{
    BasicInfo, BasicInfoRequest, CompletionRequest, RegistrationStages,
};
#[cfg(test)]
pub use user_store::MockUserStore;
pub use user_store::{FixtureUserStore, UserStore, UserStoreError};
