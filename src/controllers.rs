pub mod list;
pub use list::{ListController, ListOutcome, ListState};
pub mod form;
pub use form::{FormController, FormMode, ResourceForm, SubmitOutcome};
pub mod role_assignment;
pub use role_assignment::RoleAssignmentController;
