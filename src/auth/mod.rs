pub mod credential;
pub mod identity;
pub mod login_manager;
pub mod policy;

pub use credential::{Credential, CredentialError};
pub use identity::AuthUser;
pub use login_manager::{LoginManager, UserLoader};
pub use policy::LoginPolicy;
