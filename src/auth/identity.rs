use entity::user::Model as UserModel;

/// What the session layer needs to know about a logged-in principal.
pub trait AuthUser {
    /// Stable identifier written into the session and handed back to a `UserLoader`.
    fn get_id(&self) -> String;

    fn is_active(&self) -> bool {
        true
    }

    fn is_authenticated(&self) -> bool {
        true
    }

    fn is_anonymous(&self) -> bool {
        false
    }
}

impl AuthUser for UserModel {
    fn get_id(&self) -> String {
        self.id.to_string()
    }
}
