pub mod error;
pub mod models;


pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::new_project::NewProject;
pub use models::project::{DEFAULT_ORDER_INDEX, Project};
pub use models::project_changes::ProjectChanges;
pub use models::project_query::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageLimits, ProjectQuery};
pub use models::required_field::RequiredField;
pub use models::timestamp;
