//! Values passed through the create pipeline

mod error;
mod report;
mod request;
mod stage;

pub use error::{COMPILE_TIP, CreateError, sandbox_remediation};
pub use report::{CreateReport, OPEN_ANYWAY_HINT};
pub use request::{HelperForm, HelperRequest, suggest_helper_name};
pub use stage::Stage;
